//! Application configuration module
//!
//! Configuration is read from environment variables with the
//! `COMPLIANCE_FORM` prefix; nested values use `__` as separator.
//! Every value has a default, so an empty environment yields a runnable
//! development setup.
//!
//! # Example
//!
//! ```no_run
//! use compliance_form::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod export;
mod server;

pub use error::{ConfigError, ValidationError};
pub use export::{ExportConfig, MAX_EXPORT_SCALE, MAX_INITIAL_REQUIREMENT_ROWS};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Region export configuration
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `COMPLIANCE_FORM__*` variables:
    ///
    /// - `COMPLIANCE_FORM__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `COMPLIANCE_FORM__EXPORT__SCALE=2` -> `export.scale = 2`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMPLIANCE_FORM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.export.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
