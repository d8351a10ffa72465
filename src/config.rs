//! Process configuration, read once from the environment at startup.
//!
//! Everything downstream receives a `&Config`; nothing else touches the
//! environment after `Config::from_env` returns.

use std::path::PathBuf;
use std::time::Duration;

use crate::errors::ConfigError;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const PORT: &str = "PORT";
pub const HOST: &str = "HOST";
pub const APP_ENV: &str = "APP_ENV";
pub const PUBLIC_DIR: &str = "PUBLIC_DIR";
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Deployment mode. Anything other than `development` talks TLS to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Other(String),
}

impl Environment {
    fn parse(raw: &str) -> Self {
        match raw {
            "development" => Self::Development,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn requires_tls(&self) -> bool {
        !matches!(self, Self::Development)
    }
}

/// Connection pool settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub require_tls: bool,
}

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub public_dir: PathBuf,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values count as unset. `DATABASE_URL` is the only required key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let url = read(DATABASE_URL).ok_or(ConfigError::Missing(DATABASE_URL))?;

        let port = match read(PORT) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: PORT, value: raw })?,
            None => DEFAULT_PORT,
        };

        let max_connections = match read(DATABASE_MAX_CONNECTIONS) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: DATABASE_MAX_CONNECTIONS,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let environment = Environment::parse(read(APP_ENV).as_deref().unwrap_or("development"));

        Ok(Self {
            database: DatabaseConfig {
                url,
                max_connections,
                acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
                require_tls: environment.requires_tls(),
            },
            host: read(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            environment,
            public_dir: PathBuf::from(read(PUBLIC_DIR).unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string())),
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
