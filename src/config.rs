// Configuration loading.
// - Deserializes an optional TOML file from the user config directory.
// - Missing files fall back to defaults; malformed files fail startup.
// - Resolves the log file location alongside the other user paths.
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_PARSE_ENDPOINT: &str = "http://corenlp.run/";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parse_endpoint: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parse_endpoint: DEFAULT_PARSE_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let Some(path) = config_file_path() else {
            return Ok(Self::default());
        };
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse TOML")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("permutree").join("config.toml"))
}

pub fn log_file_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("permutree").join("permutree.log"))
}
