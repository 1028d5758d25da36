use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Deployment environment the service runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => bail!(
                "APP_ENVIRONMENT must be 'development' or 'production', got '{}'",
                other
            ),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub environment: Environment,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let environment = lookup("APP_ENVIRONMENT")
            .as_deref()
            .unwrap_or("development")
            .parse::<Environment>()?;

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Config {
            service_host,
            service_port,
            environment,
            log_level,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    /// Interactive API docs are only exposed in development.
    pub fn swagger_enabled(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn log_startup(&self, service: &str) {
        tracing::info!("{} configuration loaded:", service);
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!(
            "  Swagger UI: {}",
            if self.swagger_enabled() { "enabled" } else { "disabled" }
        );
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}
