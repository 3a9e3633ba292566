//! Runtime configuration read from the environment.
//!
//! - `TIMETABLE_HOST`: bind host (default: 127.0.0.1)
//! - `TIMETABLE_PORT`: bind port (default: 8080)
//! - `TIMETABLE_DATA_DIR`: directory for the JSON file store; in-memory when unset
//! - `RUST_LOG`: log filter (default: info)

use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Builds a config from an explicit variable map. Empty values count as unset.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| vars.get(key).filter(|v| !v.trim().is_empty()).cloned();
        let defaults = Config::default();

        let port = match get("TIMETABLE_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "TIMETABLE_PORT".to_string(),
                value: raw,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: get("TIMETABLE_HOST").unwrap_or(defaults.host),
            port,
            data_dir: get("TIMETABLE_DATA_DIR").map(PathBuf::from),
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
