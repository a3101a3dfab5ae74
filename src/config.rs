use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

const CONFIG_ENV: &str = "HOP_CONFIG";
const REQUESTS_FILE_ENV: &str = "HOP_REQUESTS_FILE";

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the request collection lives.
    pub requests_file: PathBuf,
    pub log_file: PathBuf,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            requests_file: PathBuf::from("requests.json"),
            log_file: data_dir().join("hop.log"),
            log_level: String::from("info"),
        }
    }
}

impl Config {
    /// Load from `$HOP_CONFIG` or `<config dir>/hop/config.toml`, then apply
    /// environment overrides. A missing file means defaults.
    pub fn load() -> Result<Config, AppError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_config_path);
        let mut config = Self::from_file(&path)?;
        if let Some(file) = std::env::var_os(REQUESTS_FILE_ENV) {
            config.requests_file = PathBuf::from(file);
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config, AppError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }
}

fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("hop").join("config.toml")
}

fn data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("hop")
}
