//! Server configuration.
//!
//! Settings come from an optional TOML file, then environment variables
//! override individual values. A missing file is not an error: every setting
//! has a default, so the server starts with no configuration at all.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 5000
//!
//! [resources]
//! model_path = "stack_aqi_model.json"
//! dataset_path = "final_dataset.csv"
//!
//! [trends]
//! years = [2021, 2022, 2023, 2024]
//! ```
//!
//! # Environment Variables
//!
//! - `AQI_CONFIG`: Path to the TOML file (default: search for `aqi.toml`)
//! - `HOST`: Listener host
//! - `PORT`: Listener port
//! - `AQI_MODEL_PATH`: Regression artifact path
//! - `AQI_DATASET_PATH`: Dataset CSV path

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "AQI_CONFIG";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const MODEL_PATH_ENV: &str = "AQI_MODEL_PATH";
pub const DATASET_PATH_ENV: &str = "AQI_DATASET_PATH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{name} must be a valid port number, got '{value}'")]
    InvalidPort { name: &'static str, value: String },

    #[error("Invalid listen address {0}")]
    InvalidAddress(String),

    #[error("trends.years must list at least one year")]
    NoTrendYears,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub resources: ResourceSettings,
    #[serde(default)]
    pub trends: TrendSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSettings {
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSettings {
    /// Calendar years included in the monthly trend series.
    #[serde(default = "default_years")]
    pub years: Vec<i32>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_model_path() -> PathBuf {
    PathBuf::from("stack_aqi_model.json")
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("final_dataset.csv")
}

fn default_years() -> Vec<i32> {
    (2021..=2024).collect()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            dataset_path: default_dataset_path(),
        }
    }
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            years: default_years(),
        }
    }
}

impl AppConfig {
    /// Resolve the full configuration: file (if any), then env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?,
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `aqi.toml` from the current or `backend/` directory, or defaults.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [PathBuf::from("aqi.toml"), PathBuf::from("backend/aqi.toml")];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Override settings from environment variables.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var(HOST_ENV) {
            self.server.host = host;
        }
        if let Ok(port) = env::var(PORT_ENV) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                name: PORT_ENV,
                value: port.clone(),
            })?;
        }
        if let Ok(path) = env::var(MODEL_PATH_ENV) {
            self.resources.model_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var(DATASET_PATH_ENV) {
            self.resources.dataset_path = PathBuf::from(path);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trends.years.is_empty() {
            return Err(ConfigError::NoTrendYears);
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }

    pub fn trend_years(&self) -> BTreeSet<i32> {
        self.trends.years.iter().copied().collect()
    }
}
