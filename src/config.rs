//! Process configuration read from the environment

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::chat::pipeline::DEFAULT_MODEL;
use crate::content::{ContentError, DocumentStoreConfig};
use crate::llm::openai::DEFAULT_BASE_URL;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3030;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Runtime configuration
///
/// | Variable              | Default                  | Purpose                          |
/// |-----------------------|--------------------------|----------------------------------|
/// | `OPENAI_API_KEY`      | none                     | completion credential            |
/// | `OPENAI_BASE_URL`     | `https://api.openai.com` | provider root                    |
/// | `OPENAI_MODEL`        | `gpt-4o-mini`            | model identifier                 |
/// | `OPENAI_TIMEOUT_SECS` | `60`                     | provider request timeout         |
/// | `DATABASE_URL`        | none                     | Postgres document store          |
/// | `HOST`                | `127.0.0.1`              | bind address                     |
/// | `PORT`                | `3030`                   | bind port                        |
///
/// A missing API key is not a startup error; chat requests answer 500
/// until one is configured.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_timeout: Duration,
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            openai_model: DEFAULT_MODEL.to_string(),
            openai_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            database_url: None,
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let host = get("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "HOST",
                reason: e.to_string(),
            })?;

        let port = match get("PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("OPENAI_TIMEOUT_SECS") {
            Some(secs) => secs.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                name: "OPENAI_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_timeout: Duration::from_secs(timeout_secs),
            database_url: get("DATABASE_URL"),
            host,
            port,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Document store settings, if `DATABASE_URL` names a Postgres database
    ///
    /// Other schemes are skipped with a warning so the built-in catalogue is
    /// served instead. A malformed Postgres URL is an error.
    pub fn document_store(&self) -> Result<Option<DocumentStoreConfig>, ContentError> {
        let Some(url) = self.database_url.as_deref() else {
            return Ok(None);
        };

        if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
            let scheme = url.split_once("://").map(|(scheme, _)| scheme).unwrap_or(url);
            warn!(
                "DATABASE_URL scheme '{}' is not supported, serving built-in content",
                scheme
            );
            return Ok(None);
        }

        DocumentStoreConfig::from_connection_string(url).map(Some)
    }
}
