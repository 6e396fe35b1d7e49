//! Customer seed configuration loading from config.toml
//!
//! The customers defined in config.toml are used to seed the database on
//! first run or when entries are missing, so the invoice form always has
//! someone to bill.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of customers to seed
    pub customers: Vec<CustomerConfig>,
}

/// Configuration for a single customer
#[derive(Debug, Deserialize, Clone)]
pub struct CustomerConfig {
    /// Display name
    pub name: String,
    /// Contact email; used as the natural key when seeding
    pub email: String,
    /// Avatar path, may be empty
    #[serde(default)]
    pub image_url: String,
}

/// Loads customer configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads customer configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
