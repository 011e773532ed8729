//! Startup configuration resolution.
//!
//! Order: defaults → config file → command-line overrides → validation.

use std::path::Path;

use crate::config::loader::{read_config, ConfigError};
use crate::config::{validate_config, ServerConfig};

/// Values given on the command line; each replaces the file value when set.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub capacity: Option<u32>,
}

/// Build the effective configuration.
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<ServerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ServerConfig::default(),
    };

    if let Some(bind_address) = overrides.bind_address {
        config.listener.bind_address = bind_address;
    }
    if let Some(capacity) = overrides.capacity {
        config.seats.capacity = capacity;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
