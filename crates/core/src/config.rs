//! Shared configuration logic
//!
//! Handles loading of the required credentials.

use crate::error::ConfigError;
use std::env;

/// Credentials required by every part of the service
///
/// Loaded once at startup and immutable afterwards. An absent or empty
/// variable is a startup failure; nothing here is retried or defaulted.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Practicum status API token
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Telegram chat that receives notifications
    pub telegram_chat_id: i64,
}

impl CoreConfig {
    /// Load the required credentials from environment variables
    ///
    /// This will also initialize dotenv if it hasn't been done yet.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Self {
            practicum_token: required_var("PRACTICUM_TOKEN")?,
            telegram_token: required_var("TELEGRAM_TOKEN")?,
            telegram_chat_id: required_var("TELEGRAM_CHAT_ID")?.parse().map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "TELEGRAM_CHAT_ID".to_string(),
                    reason: "must be an integer chat id".to_string(),
                }
            })?,
        })
    }
}

/// Read a variable, treating an empty value the same as an absent one
fn required_var(name: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}
