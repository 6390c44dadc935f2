use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{DEFAULT_LIBRARY_CAPACITY, LOG_FILE, USERS_FILE};

/// Custom error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    InvalidData(String),
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IoError(error)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::InvalidData(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application settings, read from a JSON file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub users_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
    pub library_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from(USERS_FILE),
            log_file: PathBuf::from(LOG_FILE),
            log_level: "info".to_string(),
            library_capacity: DEFAULT_LIBRARY_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::IoError(e)),
        };

        let config: Self =
            serde_json::from_str(&data).map_err(|e| ConfigError::InvalidData(e.to_string()))?;

        if config.library_capacity == 0 {
            return Err(ConfigError::InvalidData(
                "library_capacity must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let data =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidData(e.to_string()))?;
        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(&dir.path().join("olind.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.users_file, PathBuf::from("users.txt"));
        assert_eq!(config.library_capacity, 100);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("olind.json");
        fs::write(&path, r#"{ "users_file": "data/accounts.txt", "library_capacity": 5 }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.users_file, PathBuf::from("data/accounts.txt"));
        assert_eq!(config.library_capacity, 5);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("olind.json");

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::InvalidData(_))
        ));

        fs::write(&path, r#"{ "library_capacity": 0 }"#).unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::InvalidData(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("olind.json");
        let config = AppConfig {
            log_level: "debug".to_string(),
            library_capacity: 3,
            ..AppConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }
}
