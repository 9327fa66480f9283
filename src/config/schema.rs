//! Configuration schema types for `emoji.toml`
//!
//! Defines the structure and validation rules for emoji configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Emoji asset settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory scanned for emoji images (relative paths resolve from the config file)
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Accept only PNG files
    #[serde(default)]
    pub strict: bool,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { dir: default_dir(), strict: false }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("customemoji")
}

/// Chat integration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Chat command that lists the loaded emoji
    #[serde(default = "default_command")]
    pub command: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { command: default_command() }
    }
}

fn default_command() -> String {
    "!emoji".to_string()
}

/// Root configuration structure for emoji.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmojiConfig {
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "chat.command")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "emoji.toml: '{}' {}", self.field, self.message)
    }
}

impl EmojiConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.assets.dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "assets.dir".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        let command = self.chat.command.trim();
        if command.is_empty() {
            errors.push(ConfigValidationError {
                field: "chat.command".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        } else if !command.starts_with('!') {
            errors.push(ConfigValidationError {
                field: "chat.command".to_string(),
                message: "must start with '!'".to_string(),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: EmojiConfig = toml::from_str("").unwrap();
        assert_eq!(config, EmojiConfig::default());
        assert_eq!(config.assets.dir, PathBuf::from("customemoji"));
        assert!(!config.assets.strict);
        assert_eq!(config.chat.command, "!emoji");
        assert!(config.is_valid());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[assets]
dir = "/home/me/emoji"
strict = true

[chat]
command = "!icons"
"#;
        let config: EmojiConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.assets.dir, PathBuf::from("/home/me/emoji"));
        assert!(config.assets.strict);
        assert_eq!(config.chat.command, "!icons");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let toml = r#"
[assets]
strict = true
"#;
        let config: EmojiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.assets.dir, PathBuf::from("customemoji"));
        assert!(config.assets.strict);
    }

    #[test]
    fn test_validation_empty_dir() {
        let toml = r#"
[assets]
dir = ""
"#;
        let config: EmojiConfig = toml::from_str(toml).unwrap();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "assets.dir"));
    }

    #[test]
    fn test_validation_command_prefix() {
        let toml = r#"
[chat]
command = "emoji"
"#;
        let config: EmojiConfig = toml::from_str(toml).unwrap();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "emoji.toml: 'chat.command' must start with '!'");
    }

    #[test]
    fn test_validation_empty_command() {
        let toml = r#"
[chat]
command = "  "
"#;
        let config: EmojiConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().iter().any(|e| e.message == "must be a non-empty string"));
    }
}
