//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationErrors};

/// Errors from loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the schema.
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but failed semantic checks.
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(&fs::read_to_string(path)?)?;
    validate_config(&config)?;
    Ok(config)
}
