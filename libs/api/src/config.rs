//! Environment-driven configuration.
//!
//! `ENVIRONMENT` selects the base endpoint from a static table; tests point
//! the suite at a local stand-in with [`Config::with_base_endpoint`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Base endpoint used when `ENVIRONMENT=PRODUCTION`.
pub const PRODUCTION_BASE_ENDPOINT: &str = "https://jsonplaceholder.typicode.com";

/// Base endpoint used when `ENVIRONMENT=DEV`.
pub const DEV_BASE_ENDPOINT: &str = "http://localhost:3000";

const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unrecognized ENVIRONMENT value: {0}")]
    UnknownEnvironment(String),
}

/// Deployment environment the suite runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Dev,
}

impl Environment {
    /// Base endpoint from the static configuration table.
    pub fn base_endpoint(self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_ENDPOINT,
            Environment::Dev => DEV_BASE_ENDPOINT,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PRODUCTION" => Ok(Environment::Production),
            "DEV" => Ok(Environment::Dev),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("PRODUCTION"),
            Environment::Dev => f.write_str("DEV"),
        }
    }
}

/// Suite configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    base_endpoint: String,
}

impl Config {
    /// Configuration for a known environment.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            base_endpoint: environment.base_endpoint().trim_end_matches('/').to_string(),
        }
    }

    /// Read configuration from the process environment. A missing
    /// `ENVIRONMENT` defaults to DEV.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Dev,
        };
        Ok(Self::new(environment))
    }

    /// Point the suite at an explicit base endpoint (local stubs, mock
    /// servers).
    pub fn with_base_endpoint(base_endpoint: impl Into<String>) -> Self {
        let base_endpoint: String = base_endpoint.into();
        Self {
            environment: Environment::Dev,
            base_endpoint: base_endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }
}
