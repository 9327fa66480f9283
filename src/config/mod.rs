//! Configuration module for custom emoji
//!
//! Provides types and parsing for `emoji.toml` configuration.

pub mod loader;
pub mod schema;

pub use schema::*;
