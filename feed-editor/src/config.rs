// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use feed_contracts::client::ClientConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::APP_ID;

pub const CONFIG_ENV: &str = "FEED_EDITOR_CONFIG";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LoggingLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the feed manager's REST proxy
    pub service_url: String,
    pub request_timeout_secs: u64,
    /// Enforce per-feed allowed actions on top of service-level permissions
    pub entity_access_control: bool,
    pub log_to_disk: bool,
    pub log_level: LoggingLevel,
    /// Base name of the rolling log file; the date is appended per day
    pub log_file: Option<PathBuf>,
    pub log_retention_days: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:8400/proxy".to_string(),
            request_timeout_secs: 30,
            entity_access_control: true,
            log_to_disk: true,
            log_level: LoggingLevel::Info,
            log_file: None,
            log_retention_days: 7,
        }
    }
}

impl Config {
    /// Load from `explicit`, `$FEED_EDITOR_CONFIG`, or the XDG config dir.
    ///
    /// A missing file yields the defaults. A malformed one also yields the
    /// defaults, with a warning on stderr since logging is not up yet.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(default_config_path);

        match Self::from_file(&path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                eprintln!("feed-editor: {e}; using default configuration");
                Self::default()
            }
        }
    }

    /// `Ok(None)` when the file does not exist
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&text)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.service_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

fn default_config_path() -> PathBuf {
    if let Some(xdg_config) = std::env::var_os("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg_config).join(APP_ID).join(CONFIG_FILE);
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_ID)
            .join(CONFIG_FILE);
    }

    PathBuf::from(CONFIG_FILE)
}
