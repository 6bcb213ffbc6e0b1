//! Configuration for the Dietly client core
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: DIETLY__)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Fixed base origin every endpoint path is appended to
    pub base_url: String,
    /// Transport-level request timeout; not part of the API contract
    pub timeout_secs: u64,
}

/// On-device storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Location of the single identity record
    pub identity_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.dietly.app".to_string(),
                timeout_secs: 30,
            },
            storage: StorageConfig {
                identity_path: PathBuf::from("dietly/identity.json"),
            },
        }
    }
}

impl ClientConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with DIETLY__ prefix
    ///    e.g. DIETLY__API__BASE_URL=... sets api.base_url
    pub fn load() -> Result<Self, config::ConfigError> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&ClientConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            .add_source(config::Environment::with_prefix("DIETLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
