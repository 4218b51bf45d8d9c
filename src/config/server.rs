//! HTTP server settings.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Allowed request timeout, in seconds.
const REQUEST_TIMEOUT_RANGE: RangeInclusive<u64> = 1..=300;

/// Where and how the form API is served.
///
/// Every field is optional in the environment; missing ones take the
/// values of [`ServerConfig::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind; loopback unless the form must be reachable remotely.
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Deadline for reads and edits. Exports are not bounded.
    pub request_timeout_secs: u64,
    /// Comma-separated browser origins allowed to call the API.
    pub cors_origins: Option<String>,
}

/// Deployment flavour; production switches logs to JSON.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured CORS origins, trimmed, blanks dropped.
    pub fn allowed_origins(&self) -> Vec<String> {
        let Some(raw) = self.cors_origins.as_deref() else {
            return Vec::new();
        };
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            Err(ValidationError::InvalidPort)
        } else if !REQUEST_TIMEOUT_RANGE.contains(&self.request_timeout_secs) {
            Err(ValidationError::InvalidTimeout)
        } else {
            Ok(())
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,compliance_form=debug,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}
