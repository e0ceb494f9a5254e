//! Configuration for the editor

use serde::{Deserialize, Serialize};

use crate::input::ctrl_key;

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text centered on the screen when there is no content
    pub banner: String,
    /// Drawn at the start of rows with no content
    pub marker: char,
    /// Letter that quits when pressed with Ctrl
    pub quit_key: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner: format!("Doll Editor -- version {}", crate::DOLL_VERSION),
            marker: '~',
            quit_key: 'q',
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that every value can be drawn or typed on a plain terminal
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.marker.is_ascii_graphic() {
            return Err(ConfigError::Invalid(format!(
                "marker must be a printable ASCII character, got {:?}",
                self.marker
            )));
        }
        if !self.quit_key.is_ascii_alphabetic() {
            return Err(ConfigError::Invalid(format!(
                "quit_key must be an ASCII letter, got {:?}",
                self.quit_key
            )));
        }
        if self.banner.chars().any(char::is_control) {
            return Err(ConfigError::Invalid(
                "banner must not contain control characters".to_string(),
            ));
        }
        Ok(())
    }

    /// The byte sent by Ctrl plus the quit key
    pub fn quit_byte(&self) -> u8 {
        // validate() guarantees an ASCII letter; anything else maps to Ctrl-Q
        u8::try_from(self.quit_key).map_or(ctrl_key(b'q'), ctrl_key)
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/doll/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {}", config_path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Ignoring {}: {}", config_path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<std::path::PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| std::path::PathBuf::from(home).join(".config").join("doll"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.banner, "Doll Editor -- version 0.0.1");
        assert_eq!(config.marker, '~');
        assert_eq!(config.quit_byte(), 0x11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let bad_marker = Config {
            marker: '\t',
            ..Config::default()
        };
        assert!(matches!(bad_marker.validate(), Err(ConfigError::Invalid(_))));

        let bad_quit = Config {
            quit_key: '1',
            ..Config::default()
        };
        assert!(matches!(bad_quit.validate(), Err(ConfigError::Invalid(_))));

        let bad_banner = Config {
            banner: "two\nlines".to_string(),
            ..Config::default()
        };
        assert!(matches!(bad_banner.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config {
            banner: "hello".to_string(),
            marker: '.',
            quit_key: 'x',
        };

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.quit_byte(), 0x18);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "marker": "*" }"#).unwrap();

        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded.marker, '*');
        assert_eq!(loaded.quit_key, 'q');
        assert_eq!(loaded.banner, Config::default().banner);
    }

    #[test]
    fn test_config_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io(_))));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Json(_))));

        let invalid = dir.path().join("invalid.json");
        std::fs::write(&invalid, r#"{ "quit_key": "?" }"#).unwrap();
        assert!(matches!(Config::load(&invalid), Err(ConfigError::Invalid(_))));
    }
}
