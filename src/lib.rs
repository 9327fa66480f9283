//! Custom emoji - Library for replacing `:name:` chat tags with icon markup
//!
//! This library provides functionality to:
//! - Load emoji images from a directory and normalize them to 13x13 icons
//! - Register the icons once into a host icon table and derive their ids
//! - Rewrite chat text, turning known `:name:` tags into `<img=ID>` markup

pub mod asset;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod loader;
pub mod registrar;
pub mod rewrite;
pub mod session;
pub mod sprite;
