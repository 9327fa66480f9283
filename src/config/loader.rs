//! Configuration loading and discovery for `emoji.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::EmojiConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery.
pub const CONFIG_FILE: &str = "emoji.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse emoji.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override emoji directory
    pub dir: Option<PathBuf>,
    /// Accept only PNG files
    pub strict: Option<bool>,
}

/// Find emoji.toml in `start` or the nearest ancestor holding one.
pub fn find_config_from(start: &Path) -> Option<PathBuf> {
    start.ancestors().map(|dir| dir.join(CONFIG_FILE)).find(|path| path.is_file())
}

/// Load configuration from an emoji.toml file.
///
/// If a path is provided, loads from that file. Otherwise searches upward
/// from the working directory; with no file found the defaults apply. A
/// relative `assets.dir` is resolved against the directory holding the
/// config file.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("chat/emoji.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<EmojiConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => env::current_dir().ok().and_then(|cwd| find_config_from(&cwd)),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(EmojiConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<EmojiConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: EmojiConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if config.assets.dir.is_relative() {
        if let Some(root) = path.parent() {
            config.assets.dir = root.join(&config.assets.dir);
        }
    }

    tracing::debug!(path = %path.display(), dir = %config.assets.dir.display(), "loaded config");
    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut EmojiConfig, overrides: &CliOverrides) {
    if let Some(ref dir) = overrides.dir {
        config.assets.dir = dir.clone();
    }

    if let Some(strict) = overrides.strict {
        config.assets.strict = strict;
    }
}
