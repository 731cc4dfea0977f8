//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `FRAMEWORK_ADVISOR` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use framework_advisor::config::AdvisorConfig;
//!
//! let config = AdvisorConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Tree data: {}", config.data.tree_path.display());
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;
use std::path::PathBuf;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdvisorConfig {
    /// Questionnaire data file locations
    #[serde(default)]
    pub data: DataConfig,
}

/// Locations of the three static questionnaire data files
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Decision tree JSON file
    #[serde(default = "default_tree_path")]
    pub tree_path: PathBuf,

    /// Preference questions JSON file
    #[serde(default = "default_preferences_path")]
    pub preferences_path: PathBuf,

    /// Framework catalog JSON file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
}

fn default_tree_path() -> PathBuf {
    PathBuf::from("data/decision_tree.json")
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from("data/preferences.json")
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/frameworks.json")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            tree_path: default_tree_path(),
            preferences_path: default_preferences_path(),
            catalog_path: default_catalog_path(),
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FRAMEWORK_ADVISOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `FRAMEWORK_ADVISOR__DATA__TREE_PATH=...` -> `data.tree_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FRAMEWORK_ADVISOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configured path is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.data.validate()
    }
}

impl DataConfig {
    /// Validates the data file locations.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tree_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataPath("tree_path"));
        }
        if self.preferences_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataPath("preferences_path"));
        }
        if self.catalog_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataPath("catalog_path"));
        }
        Ok(())
    }
}
