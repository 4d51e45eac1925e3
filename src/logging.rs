//! Tracing subscriber setup.
//!
//! The filter is read from `SUPPORT_DASH_LOG`, then `RUST_LOG`, then the
//! per-target default level. The fullscreen dashboard owns the terminal, so it
//! logs to a file; CLI subcommands log to stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SUPPORT_DASH_LOG";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr, `warn` unless overridden
    Stderr,
    /// Append to a file, `info` unless overridden
    File(PathBuf),
}

impl LogTarget {
    fn default_level(&self) -> &'static str {
        match self {
            LogTarget::Stderr => "warn",
            LogTarget::File(_) => "info",
        }
    }
}

/// Build the filter from the environment, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber. Calling this more than once is harmless:
/// later calls leave the first subscriber in place.
pub fn init(target: &LogTarget) -> Result<()> {
    let filter = env_filter(target.default_level());

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_target(false)
                .try_init();
        }
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
    }

    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to open log file {}: {}", path.display(), e),
            )
        })?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_levels() {
        assert_eq!(LogTarget::Stderr.default_level(), "warn");
        assert_eq!(
            LogTarget::File(PathBuf::from("x.log")).default_level(),
            "info"
        );
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("support-dash.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
