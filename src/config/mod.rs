/// Database configuration and connection management
pub mod database;

/// Customer seed list loading from config.toml
pub mod customers;
