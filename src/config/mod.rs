//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TOPIC_REPORT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use topic_report::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod export;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Variable accepted as the Gemini API key when the prefixed one is unset.
pub const API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Generation provider configuration (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Artifact output configuration
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Uses `GOOGLE_API_KEY` as the default API key
    /// 3. Reads environment variables with `TOPIC_REPORT` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPIC_REPORT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TOPIC_REPORT__EXPORT__OUTPUT_DIR=out` -> `export.output_dir = "out"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// A missing API key is reported by [`AppConfig::validate()`].
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
            builder = builder.set_default("ai.gemini_api_key", key)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("TOPIC_REPORT")
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
        self.server.validate()?;
        self.ai.validate()?;
        self.export.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("TOPIC_REPORT__AI__GEMINI_API_KEY", "prefixed-key");
    }

    fn clear_env() {
        env::remove_var("TOPIC_REPORT__AI__GEMINI_API_KEY");
        env::remove_var("TOPIC_REPORT__SERVER__PORT");
        env::remove_var("TOPIC_REPORT__SERVER__ENVIRONMENT");
        env::remove_var("TOPIC_REPORT__EXPORT__OUTPUT_DIR");
        env::remove_var("TOPIC_REPORT__EXPORT__UNIQUE_NAMES");
        env::remove_var(API_KEY_ENV_VAR);
    }

    fn api_key(config: &AppConfig) -> Option<String> {
        config
            .ai
            .gemini_api_key
            .as_ref()
            .map(|k| k.expose_secret().clone())
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(api_key(&config).as_deref(), Some("prefixed-key"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_google_api_key_is_accepted() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(API_KEY_ENV_VAR, "google-key");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(api_key(&config).as_deref(), Some("google-key"));
    }

    #[test]
    fn test_prefixed_key_wins_over_google_api_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        env::set_var(API_KEY_ENV_VAR, "google-key");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(api_key(&result.unwrap()).as_deref(), Some("prefixed-key"));
    }

    #[test]
    fn test_missing_key_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("GOOGLE_API_KEY"))
        );
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.export.output_dir, PathBuf::from("."));
        assert!(!config.export.unique_names);
    }

    #[test]
    fn test_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        set_minimal_env();
        env::set_var("TOPIC_REPORT__SERVER__PORT", "3000");
        env::set_var("TOPIC_REPORT__SERVER__ENVIRONMENT", "production");
        env::set_var("TOPIC_REPORT__EXPORT__OUTPUT_DIR", "/tmp/relatorios");
        env::set_var("TOPIC_REPORT__EXPORT__UNIQUE_NAMES", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.export.output_dir, PathBuf::from("/tmp/relatorios"));
        assert!(config.export.unique_names);
    }
}
