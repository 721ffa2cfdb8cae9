//! Log subscriber setup
//!
//! The TUI owns stdout through the alternate screen, so interactive sessions
//! only log when a file is given. Headless runs log to stderr. The level is
//! taken from `RUST_LOG` and defaults to `warn`.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Cannot open log file '{}': {source}", path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber for `target`
pub fn init(target: &LogTarget) -> Result<(), LoggingError> {
    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| LoggingError::Install(e.to_string())),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| LoggingError::Install(e.to_string()))
        }
    }
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_noop() {
        assert!(init(&LogTarget::Disabled).is_ok());
    }

    #[test]
    fn test_unopenable_log_file() {
        let path = PathBuf::from("/nonexistent-dir/for/sure/calc.log");
        let err = init(&LogTarget::File(path)).unwrap_err();
        assert!(matches!(err, LoggingError::OpenLogFile { .. }));
        assert!(err.to_string().starts_with("Cannot open log file"));
    }
}
