use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use recipe_book_core::Unit;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Recipe file used when a command does not name one
    pub recipe_file: ConfigValue<PathBuf>,
    /// Portion unit for newly created recipes
    pub portion_unit: ConfigValue<Unit>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    recipe_file: Option<PathBuf>,
    portion_unit: Option<Unit>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let default_file = Self::default_data_dir().join("recipe.json");

        let mut recipe_file = ConfigValue::new(default_file, ConfigSource::Default);
        let mut portion_unit = ConfigValue::new(Unit::Piece, ConfigSource::Default);
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(file) = file_config.recipe_file {
                // Resolve relative paths against config file's directory
                let resolved = if file.is_relative() {
                    path.parent().map(|p| p.join(&file)).unwrap_or(file)
                } else {
                    file
                };
                recipe_file = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(unit) = file_config.portion_unit {
                portion_unit = ConfigValue::new(unit, ConfigSource::File);
            }
        }

        if let Ok(file) = std::env::var("RECIPES_FILE") {
            recipe_file = ConfigValue::new(PathBuf::from(file), ConfigSource::Environment);
        }
        if let Ok(unit) = std::env::var("RECIPES_PORTION_UNIT") {
            let unit = Unit::from_str(&unit).map_err(ConfigError::InvalidUnit)?;
            portion_unit = ConfigValue::new(unit, ConfigSource::Environment);
        }

        Ok(Self {
            recipe_file,
            portion_unit,
            config_file,
        })
    }

    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipe-book")
            .join("config.yaml")
    }

    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipe-book")
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidUnit(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file {}: {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file {}: {}", path.display(), e)
            }
            ConfigError::InvalidUnit(e) => write!(f, "RECIPES_PORTION_UNIT: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_config_file() {
        let config = Config::load(Some(PathBuf::from("/nonexistent/config.yaml"))).unwrap();
        assert_eq!(config.recipe_file.source, ConfigSource::Default);
        assert_eq!(config.portion_unit.value, Unit::Piece);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "recipe_file: my.json\nportion_unit: cup\n").unwrap();

        let config = Config::load(Some(path.clone())).unwrap();
        assert_eq!(config.recipe_file.source, ConfigSource::File);
        // Relative paths resolve against the config file's directory.
        assert_eq!(config.recipe_file.value, dir.path().join("my.json"));
        assert_eq!(config.portion_unit.value, Unit::Cup);
        assert_eq!(config.config_file, Some(path));
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "recipe_file: [not, a, path\n").unwrap();
        assert!(Config::load(Some(path)).is_err());
    }
}
