//! Service configuration loaded from the environment (and an optional `.env` file).
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `DINELINE_BIND_ADDR` | `127.0.0.1:8000` | Address the HTTP server listens on |
//! | `DINELINE_QUEUE_BUFFER` | `32` | Capacity of the order actor's request channel |

use crate::order_actor;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

pub const BIND_ADDR_VAR: &str = "DINELINE_BIND_ADDR";
pub const QUEUE_BUFFER_VAR: &str = "DINELINE_QUEUE_BUFFER";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Runtime settings of the `dineline` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub queue_buffer: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            queue_buffer: order_actor::DEFAULT_BUFFER,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // Don't fail if .env doesn't exist
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key -> value source. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = parse(BIND_ADDR_VAR, value)?;
        }
        if let Some(value) = lookup(QUEUE_BUFFER_VAR) {
            config.queue_buffer = parse(QUEUE_BUFFER_VAR, value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.queue_buffer == 0 {
            return Err(ConfigError::ValidationError(format!(
                "{} must be greater than 0",
                QUEUE_BUFFER_VAR
            )));
        }
        Ok(())
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Bind address: {}", self.bind_addr);
        info!("  Queue buffer: {}", self.queue_buffer);
    }
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
