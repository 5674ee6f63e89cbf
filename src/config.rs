use std::fs;
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{Result, StorageAppError};
use crate::storage::StorageMode;

/// Default number of slots in the bin.
pub const DEFAULT_CAPACITY: usize = 8;

/// Largest bin the config accepts; slots are preallocated up front.
pub const MAX_CAPACITY: usize = 1024;

/// Longest allowed shelf life, in days from today.
pub const DEFAULT_MAX_SHELF_DAYS: u32 = 14;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Foods the bin accepts.
pub const DEFAULT_ALLOWED_FOODS: [&str; 5] = ["Burger", "Pizza", "Fries", "Sandwich", "Hotdog"];

/// Application settings, loaded from JSON and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub capacity: usize,

    /// Fixed mode; `None` means ask at startup.
    pub mode: Option<StorageMode>,

    pub max_shelf_days: u32,

    pub allowed_foods: Vec<String>,

    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            mode: None,
            max_shelf_days: DEFAULT_MAX_SHELF_DAYS,
            allowed_foods: DEFAULT_ALLOWED_FOODS.iter().map(|s| s.to_string()).collect(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load a config from a JSON file. Missing fields take defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Build the effective config: file (if any), then CLI overrides, then validation.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(mode) = cli.mode {
            config.mode = Some(mode);
        }
        if let Some(capacity) = cli.capacity {
            config.capacity = capacity;
        }
        if let Some(level) = &cli.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(StorageAppError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(StorageAppError::InvalidConfig(format!(
                "capacity {} exceeds the maximum of {}",
                self.capacity, MAX_CAPACITY
            )));
        }
        if self.allowed_foods.iter().all(|f| f.trim().is_empty()) {
            return Err(StorageAppError::InvalidConfig(
                "allowed_foods must name at least one food".to_string(),
            ));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level.parse().map_err(|_| {
            StorageAppError::InvalidConfig(format!("unknown log level '{}'", self.log_level))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert_eq!(config.capacity, 8);
        assert_eq!(config.max_shelf_days, 14);
        assert_eq!(config.allowed_foods.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"capacity": 3, "mode": "queue"}"#).unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.capacity, 3);
        assert_eq!(config.mode, Some(StorageMode::Queue));
        assert_eq!(config.max_shelf_days, DEFAULT_MAX_SHELF_DAYS);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"capacity": 3, "mode": "queue", "log_level": "info"}"#)
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::parse_from(["food_storage", "--config", path.as_str(), "--mode", "stack"]);
        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.mode, Some(StorageMode::Stack));
        assert_eq!(config.capacity, 3);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let cli = Cli::parse_from(["food_storage", "--capacity", "0"]);
        assert!(matches!(
            AppConfig::from_cli(&cli),
            Err(StorageAppError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_capacity() {
        let cli = Cli::parse_from(["food_storage", "--capacity", "18446744073709551615"]);
        assert!(matches!(
            AppConfig::from_cli(&cli),
            Err(StorageAppError::InvalidConfig(_))
        ));

        let at_limit = AppConfig {
            capacity: MAX_CAPACITY,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        let over_limit = AppConfig {
            capacity: MAX_CAPACITY + 1,
            ..Default::default()
        };
        assert!(over_limit.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let cli = Cli::parse_from(["food_storage", "--config", "/nonexistent/storage.json"]);
        assert!(matches!(
            AppConfig::from_cli(&cli),
            Err(StorageAppError::Io(_))
        ));
    }
}
