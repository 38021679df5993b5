//! Server configuration loaded from the environment.
//!
//! Variables: `HOST` (default `0.0.0.0`), `PORT` (default `3000`) and
//! `SITE_ROOT`, which overrides the Leptos site root holding the compiled
//! `pkg/` bundle. `.env` files are loaded by `main` before this runs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::ParseIntError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("HOST must not be empty")]
    EmptyHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns `None` for unset keys.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyHost),
            Some(raw) => raw.trim().to_owned(),
            None => DEFAULT_HOST.to_owned(),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw.clone(), source })?,
            None => DEFAULT_PORT,
        };

        let site_root = lookup("SITE_ROOT")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty());

        Ok(Self { host, port, site_root })
    }

    /// `host:port` string for the listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
