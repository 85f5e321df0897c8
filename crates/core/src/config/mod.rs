//! Application configuration.

mod loader;
mod types;

pub use loader::{load_config, load_config_from_str};
pub use types::{Config, ReportConfig};

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse config: {0}")]
    ParseError(String),
}
