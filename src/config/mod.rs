//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `BOARDWATCH` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use boardwatch::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Watching channel {}", config.events.key_prefix);
//! ```

mod error;
mod events;
mod redis;

pub use error::{ConfigError, ValidationError};
pub use events::EventsConfig;
pub use redis::RedisConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Redis configuration (store + pubsub)
    pub redis: RedisConfig,

    /// Subscription index and event-channel configuration
    #[serde(default)]
    pub events: EventsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `BOARDWATCH` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BOARDWATCH__REDIS__URL=redis://…` -> `redis.url = …`
    /// - `BOARDWATCH__EVENTS__KEY_PREFIX=boardwatch` -> `events.key_prefix = …`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required environment variables are missing
    /// or values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BOARDWATCH")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.redis.validate()?;
        self.events.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("BOARDWATCH__REDIS__URL", "redis://localhost:6379");
    }

    fn clear_env() {
        env::remove_var("BOARDWATCH__REDIS__URL");
        env::remove_var("BOARDWATCH__EVENTS__KEY_PREFIX");
        env::remove_var("BOARDWATCH__EVENTS__SESSION_TTL_SECS");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.redis.url, "redis://localhost:6379");
        assert_eq!(config.events.key_prefix, "boardwatch");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_key_prefix() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BOARDWATCH__EVENTS__KEY_PREFIX", "staging");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.events.key_prefix, "staging");
    }

    #[test]
    fn test_custom_session_ttl() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("BOARDWATCH__EVENTS__SESSION_TTL_SECS", "3600");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.events.session_ttl_secs, 3600);
    }
}
