//! Configuration management for the hours service.
//!
//! Loaded with figment from defaults, an optional TOML file, and environment
//! variables.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use hours_engine::MissingEntityPolicy;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ServerError};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "washroom-hours.toml";

/// Prefix for environment overrides. Nested keys are separated by `__`,
/// e.g. `WASHROOM_SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "WASHROOM_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `WASHROOM_`)
/// 2. TOML config file (`washroom-hours.toml` or the `--config` path)
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener configuration.
    pub server: ServerConfig,
    /// Store configuration.
    pub store: StoreConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Store configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON seed file loaded into the in-memory store at startup.
    /// When unset the store starts empty.
    pub seed_path: Option<PathBuf>,
    /// How lookups of unknown washrooms are answered.
    pub missing_entity: MissingEntityPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        let config: Config = Self::figment(&config_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The provider stack used by [`Config::load_from`].
    #[must_use]
    pub fn figment(config_file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::ConfigValidation {
                message: "server.port must be greater than 0".to_string(),
            });
        }

        if self.server.host.trim().is_empty() {
            return Err(ServerError::ConfigValidation {
                message: "server.host must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Resolve the listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if `server.host` is not an IP address.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .host
            .parse()
            .map_err(|e| ServerError::ConfigValidation {
                message: format!("server.host '{}': {e}", self.server.host),
            })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}
