// SPDX-License-Identifier: GPL-3.0-only

//! Console and rolling-file tracing for the `feed-editor` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app::APP_ID;
use crate::config::Config;

/// Overrides `Config::log_file`
pub const LOG_FILE_ENV: &str = "FEED_EDITOR_LOG_FILE";

const DEFAULT_LOG_NAME: &str = "feed-editor.log";
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Where the rolling appender writes: `dir/prefix.YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub dir: PathBuf,
    pub prefix: String,
}

impl LogFile {
    /// `$FEED_EDITOR_LOG_FILE`, then `log_file` from the config, then the
    /// XDG state dir
    pub fn resolve(config: &Config) -> Self {
        let path = std::env::var_os(LOG_FILE_ENV)
            .map(PathBuf::from)
            .or_else(|| config.log_file.clone())
            .unwrap_or_else(|| default_log_dir().join(DEFAULT_LOG_NAME));

        Self::from_path(&path)
    }

    fn from_path(path: &Path) -> Self {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => default_log_dir(),
        };
        let prefix = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_LOG_NAME.to_string());

        Self { dir, prefix }
    }

    /// Delete this appender's files last modified more than `keep_days` ago.
    /// Returns how many were removed.
    pub fn prune(&self, keep_days: u64) -> usize {
        let Some(cutoff) = SystemTime::now().checked_sub(DAY * keep_days as u32) else {
            return 0;
        };
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return 0;
        };

        entries
            .flatten()
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(&self.prefix))
            .filter(|entry| {
                entry
                    .metadata()
                    .and_then(|m| m.modified())
                    .is_ok_and(|modified| modified < cutoff)
            })
            .filter(|entry| fs::remove_file(entry.path()).is_ok())
            .count()
    }

    fn writer(&self, keep_days: u64) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create log directory {}", self.dir.display()))?;

        self.prune(keep_days);

        let appender = tracing_appender::rolling::daily(&self.dir, &self.prefix);
        Ok(tracing_appender::non_blocking(appender))
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Hold the returned guard until exit so buffered file
/// output is flushed.
pub fn init(config: &Config) -> Option<WorkerGuard> {
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter(config));

    let (file, guard) = if config.log_to_disk {
        let target = LogFile::resolve(config);
        match target.writer(config.log_retention_days) {
            Ok((writer, guard)) => {
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_ansi(false)
                    .with_filter(filter(config));
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("{APP_ID}: file logging disabled: {e:#}");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .init();

    guard
}

fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config))
}

// Our crates at the configured level, the HTTP stack only when it warns.
fn default_filter(config: &Config) -> EnvFilter {
    let level = config.log_level.as_directive();
    EnvFilter::new(format!(
        "warn,feed_editor={level},feed_contracts={level},feed_types={level}"
    ))
}

fn default_log_dir() -> PathBuf {
    let state = std::env::var_os("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/state")))
        .unwrap_or_else(std::env::temp_dir);

    state.join(APP_ID).join("logs")
}
