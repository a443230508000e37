use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use recipe_engine::{ClientSettings, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub(crate) const DEFAULT_CONFIG_FILE: &str = "recipe_app.ron";

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Settings read from `recipe_app.ron`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub api_base: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub process_timeout_secs: u64,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            api_base: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            process_timeout_secs: client.process_timeout.as_secs(),
            log_destination: LogDestination::File,
            log_file: PathBuf::from("./recipe_app.log"),
        }
    }
}

impl AppConfig {
    pub(crate) fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.api_base.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            process_timeout: Duration::from_secs(self.process_timeout_secs),
            ..ClientSettings::default()
        }
    }
}

/// Reads the config file. A missing file is not an error and yields defaults.
pub(crate) fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}
