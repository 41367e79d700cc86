//! Configuration file for the CLI
//!
//! Every field is optional. A missing config file path means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;
use crate::observability::Severity;
use crate::query::{QueryDefaults, SortDirection, SortKey, DEFAULT_PAGE_SIZE};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON array of records to load instead of the built-in inventory
    #[serde(default)]
    pub inventory_path: Option<PathBuf>,

    /// Page size for queries that do not name one (default 10)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Sort key for queries that do not name one (default "id")
    #[serde(default = "default_sort_key")]
    pub default_sort_key: String,

    /// Sort direction for queries that do not name one (default "ascending")
    #[serde(default = "default_sort_direction")]
    pub default_sort_direction: String,

    /// Lowest log severity written to stderr (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_sort_key() -> String {
    SortKey::default().as_str().to_string()
}
fn default_sort_direction() -> String {
    "ascending".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: None,
            page_size: default_page_size(),
            default_sort_key: default_sort_key(),
            default_sort_direction: default_sort_direction(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path`, or use defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.page_size == 0 {
            return Err(CliError::config_error("page_size must be > 0"));
        }

        self.query_defaults()?;
        self.min_severity()?;

        Ok(())
    }

    /// Query defaults derived from this configuration
    pub fn query_defaults(&self) -> CliResult<QueryDefaults> {
        let sort_key = self.default_sort_key.parse::<SortKey>().map_err(|e| {
            CliError::config_error(format!("Invalid default_sort_key: {}", e.message()))
        })?;

        let sort_direction = self
            .default_sort_direction
            .parse::<SortDirection>()
            .map_err(|e| {
                CliError::config_error(format!("Invalid default_sort_direction: {}", e.message()))
            })?;

        Ok(QueryDefaults {
            sort_key,
            sort_direction,
            page_size: self.page_size,
        })
    }

    /// Minimum log severity
    pub fn min_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(format!("Invalid log_level: {}", e)))
    }

    /// Loads the configured inventory file, or the built-in inventory
    pub fn load_inventory(&self) -> CliResult<Inventory> {
        let path = match &self.inventory_path {
            Some(path) => path,
            None => {
                return Inventory::seeded().map_err(|e| {
                    CliError::config_error(format!("Invalid built-in inventory: {}", e))
                })
            }
        };

        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read inventory {:?}: {}", path, e))
        })?;

        Inventory::from_json(&content).map_err(|e| {
            CliError::config_error(format!("Invalid inventory {:?}: {} ({})", path, e, e.code()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.default_sort_key, "id");
        assert_eq!(config.default_sort_direction, "ascending");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.query_defaults().unwrap(), QueryDefaults::default());
    }

    #[test]
    fn test_config_rejects_zero_page_size() {
        let result = Config::from_json(&json!({"page_size": 0}).to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_unknown_sort_key() {
        let result = Config::from_json(&json!({"default_sort_key": "color"}).to_string());
        let err = result.unwrap_err();
        assert_eq!(err.code_str(), "SNACK_CLI_CONFIG_ERROR");
        assert!(err.message().contains("default_sort_key"));
    }

    #[test]
    fn test_config_rejects_unknown_log_level() {
        let result = Config::from_json(&json!({"log_level": "verbose"}).to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_json(
            &json!({
                "page_size": 2,
                "default_sort_key": "price",
                "default_sort_direction": "desc",
                "log_level": "warn"
            })
            .to_string(),
        )
        .unwrap();

        let defaults = config.query_defaults().unwrap();
        assert_eq!(defaults.page_size, 2);
        assert_eq!(defaults.sort_key, SortKey::Price);
        assert_eq!(defaults.sort_direction, SortDirection::Descending);
        assert_eq!(config.min_severity().unwrap(), Severity::Warn);
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(&temp_dir.path().join("absent.json"));
        assert_eq!(result.unwrap_err().code_str(), "SNACK_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_seeded_inventory_without_path() {
        let inventory = Config::default().load_inventory().unwrap();
        assert_eq!(inventory.len(), 4);
    }

    #[test]
    fn test_inventory_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snacks.json");
        let records = json!([
            {"id": 7, "name": "Rice Cake", "category": "Crackers", "weight": "9g",
             "price": 150, "calories": 35, "ingredients": "Rice, Salt", "inStock": true}
        ]);
        fs::write(&path, records.to_string()).unwrap();

        let config = Config {
            inventory_path: Some(path),
            ..Config::default()
        };
        let inventory = config.load_inventory().unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(7).unwrap().ingredients.len(), 2);
    }

    #[test]
    fn test_inventory_file_with_bad_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snacks.json");
        let records = json!([
            {"id": 1, "name": "", "category": "Bars", "weight": "21g",
             "price": 299, "calories": 150}
        ]);
        fs::write(&path, records.to_string()).unwrap();

        let config = Config {
            inventory_path: Some(path),
            ..Config::default()
        };
        let err = config.load_inventory().unwrap_err();
        assert_eq!(err.code_str(), "SNACK_CLI_CONFIG_ERROR");
        assert!(err.message().contains("SNACK_RECORD_MALFORMED"));
    }
}
