//! Configuration for worker process
//!
//! Loads configuration from environment variables

use anyhow::{Context, Result};
use practigram_core::config::CoreConfig;
use std::env;
use std::ops::Deref;

use crate::practicum::PRACTICUM_ENDPOINT;

/// Worker configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Core configuration
    pub core: CoreConfig,

    /// Poll interval in seconds
    pub poll_interval_secs: u64,

    /// Status API endpoint
    pub endpoint: String,

    /// Timeout for a single status API request, in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let core = CoreConfig::from_env()?;

        Ok(Self {
            core,
            poll_interval_secs: env::var("WORKER_POLL_INTERVAL_SECS")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .context("WORKER_POLL_INTERVAL_SECS must be a valid integer")?,

            endpoint: env::var("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|_| PRACTICUM_ENDPOINT.to_string()),

            http_timeout_secs: env::var("WORKER_HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("WORKER_HTTP_TIMEOUT_SECS must be a valid integer")?,
        })
    }
}

impl Deref for Config {
    type Target = CoreConfig;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}
