//! Logging setup: a human-readable stderr layer plus an optional JSONL file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const ENV_LOG_PATH: &str = "WORDSCAN_LOG_PATH";
const ENV_LOG_DIR: &str = "WORDSCAN_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "wordscan.jsonl";

/// Where log files go, if anywhere.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Exact log file path. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for `wordscan.jsonl`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to the configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            log_dir: std::env::var_os(ENV_LOG_DIR)
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }

    /// Directory and file name of the log file, when file logging is on.
    fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(path) = &self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), DEFAULT_LOG_FILE.to_string()))
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins. Otherwise `--quiet` means errors only, each `-v` raises
/// the level one step, and the configured level applies when neither is set.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered file logs flush.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some((dir, name)) = config.log_file() else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()?;
        return Ok(None);
    };

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().json().with_writer(writer))
        .try_init()?;
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_logging_by_default() {
        let config = ObservabilityConfig::default();
        assert!(config.log_file().is_none());
    }

    #[test]
    fn log_dir_uses_default_file_name() {
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(PathBuf::from("/var/log/wordscan")),
        };
        let (dir, name) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("/var/log/wordscan"));
        assert_eq!(name, DEFAULT_LOG_FILE);
    }

    #[test]
    fn log_path_wins_over_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/tmp/scan.log")),
            log_dir: Some(PathBuf::from("/var/log/wordscan")),
        };
        let (dir, name) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp"));
        assert_eq!(name, "scan.log");
    }

    #[test]
    fn bare_log_path_lands_in_cwd() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("scan.log")),
            log_dir: None,
        };
        let (dir, _) = config.log_file().unwrap();
        assert_eq!(dir, PathBuf::from("."));
    }
}
