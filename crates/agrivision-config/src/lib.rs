use agrivision_format::{ClassNames, Dialect, FormatOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User preferences for formatting, stored as TOML.
///
/// Every field is optional in the file; unset fields keep the dialect's
/// defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dialect: Dialect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_quotes: Option<bool>,
    /// Replaces the dialect's class names wholesale when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<ClassNames>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/agrivision");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builds formatter options: the dialect's defaults with any overrides
    /// from this file applied.
    pub fn format_options(&self) -> FormatOptions {
        let mut options = self.dialect.options();
        if let Some(fallback) = &self.fallback_text {
            options.fallback = fallback.clone();
        }
        if let Some(escape_quotes) = self.escape_quotes {
            options.escape_quotes = escape_quotes;
        }
        if let Some(classes) = &self.classes {
            options.classes = classes.clone();
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/agrivision/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            dialect: Dialect::Recommendation,
            fallback_text: Some("Nothing to show.".to_string()),
            escape_quotes: Some(true),
            classes: None,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format_options(), FormatOptions::default());
    }

    #[test]
    fn test_overrides_apply_over_dialect() {
        let config: Config = toml::from_str(
            r#"
dialect = "treatment"
fallback_text = "Ask an agronomist."
escape_quotes = false

[classes]
list = "advice"
"#,
        )
        .unwrap();

        let options = config.format_options();
        assert_eq!(options.fallback, "Ask an agronomist.");
        assert!(!options.escape_quotes);
        assert_eq!(options.classes.list.as_deref(), Some("advice"));
        assert_eq!(options.classes.numbered_item, None);
    }

    #[test]
    fn test_unknown_dialect_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "dialect = \"markdown\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            dialect: Dialect::Treatment,
            fallback_text: None,
            escape_quotes: None,
            classes: Some(ClassNames {
                list: Some("care-steps".to_string()),
                ..ClassNames::default()
            }),
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
