//! Server configuration from environment variables.

use std::path::PathBuf;

/// Environment variable holding the map tile provider token.
pub const MAPBOX_ACCESS_TOKEN: &str = "MAPBOX_ACCESS_TOKEN";

/// Errors in the process environment that prevent startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("{name} environment variable not set")]
    MissingVar {
        /// Variable name.
        name: &'static str,
    },

    /// `PORT` is not a valid port number.
    #[error("invalid PORT {value:?}")]
    InvalidPort {
        /// The raw value.
        value: String,
    },
}

/// Everything the server reads from its environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`, default `127.0.0.1`).
    pub bind_addr: String,
    /// Port to bind (`PORT`, default `8080`).
    pub port: u16,
    /// Directory of frontend files (`STATIC_DIR`, default `app`).
    pub static_dir: PathBuf,
    /// Map tile provider token (`MAPBOX_ACCESS_TOKEN`, required).
    pub mapbox_access_token: String,
    /// Overrides the dataset download URL (`DATASET_URL`).
    pub dataset_url: Option<String>,
    /// Reads the dataset from disk instead (`DATASET_PATH`).
    pub dataset_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the token is missing or `PORT` is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`. Empty values count as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the token is missing or `PORT` is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mapbox_access_token = var(MAPBOX_ACCESS_TOKEN).ok_or(ConfigError::MissingVar {
            name: MAPBOX_ACCESS_TOKEN,
        })?;

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => 8080,
        };

        Ok(Self {
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            static_dir: var("STATIC_DIR").map_or_else(|| PathBuf::from("app"), PathBuf::from),
            mapbox_access_token,
            dataset_url: var("DATASET_URL"),
            dataset_path: var("DATASET_PATH").map(PathBuf::from),
        })
    }
}
