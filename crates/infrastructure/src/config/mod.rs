//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `hr_api`: HR backend endpoint settings
//!
//! Loaded from `config/nestey.toml` (optional) with `NESTEY_`-prefixed
//! environment variable overrides, e.g. `NESTEY_SERVER__PORT=8080`.

mod hr_api;
mod server;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use hr_api::HrApiConfig;
pub use server::ServerConfig;

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - relaxed defaults, permissive CORS
    #[default]
    Development,
    /// Production environment - restricted CORS origins required
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Assistant behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Employee all gateway calls act on behalf of
    // TODO: take the employee from an authenticated session once the portal
    // grows a login; a fixed id mirrors the current single-user deployment
    #[serde(default = "default_employee_id")]
    pub employee_id: i64,
}

const fn default_employee_id() -> i64 {
    2
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            employee_id: default_employee_id(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// HR backend settings
    #[serde(default)]
    pub hr_api: HrApiConfig,
    /// Assistant behavior settings
    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Reads `config/nestey.toml` when present, then applies `NESTEY_`
    /// environment variables (`__` separates nesting levels).
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/nestey").required(false))
            .add_source(config::Environment::with_prefix("NESTEY").separator("__"))
            .build()?;

        let app_config: Self = settings.try_deserialize()?;
        debug!(environment = %app_config.environment, "Configuration loaded");
        Ok(app_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_development_localhost() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.hr_api.base_url, "http://localhost:3001");
        assert_eq!(config.assistant.employee_id, 2);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                environment = "production"

                [server]
                port = 8080

                [hr_api]
                base_url = "https://hr.example.com"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.hr_api.base_url, "https://hr.example.com");
        assert_eq!(config.hr_api.timeout_secs, 30);
    }

    #[test]
    fn environment_display() {
        assert_eq!(Environment::Development.to_string(), "development");
        assert_eq!(Environment::Production.to_string(), "production");
    }
}
