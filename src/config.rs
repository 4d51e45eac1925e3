//! Application configuration.
//!
//! Settings come from, in increasing precedence:
//! - the base URL compiled in from `SUPPORT_DASH_API_BASE` at build time
//!   (falling back to the local development server)
//! - `config.yaml` in the platform config directory (or `--config <path>`)
//! - the `SUPPORT_DASH_API_BASE` environment variable at run time
//! - the `--api-base` command-line flag

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DashError, Result};

/// Environment variable naming the support API base URL.
pub const API_BASE_ENV: &str = "SUPPORT_DASH_API_BASE";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = match option_env!("SUPPORT_DASH_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8080",
};

const APP_NAME: &str = "support-dash";

/// On-disk configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the support API (e.g. `https://support.example.com`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Where the dashboard writes its log while it owns the terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Effective settings after every configuration source has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: Url,
    pub log_file: PathBuf,
}

impl Config {
    /// Default config file location, if the platform has a config directory
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load the config file at `path`; a missing file yields the default config
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DashError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the effective settings. `cli_api_base` is the value of the
    /// `--api-base` flag, which wins over every other source.
    pub fn resolve(&self, cli_api_base: Option<&str>) -> Result<Settings> {
        let env_api_base = env::var(API_BASE_ENV).ok().filter(|v| !v.trim().is_empty());

        let raw = cli_api_base
            .map(str::to_string)
            .or(env_api_base)
            .or_else(|| self.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Settings {
            api_base: parse_api_base(&raw)?,
            log_file: self.log_file.clone().unwrap_or_else(default_log_file),
        })
    }
}

/// Parse and validate a base URL for the support API
pub fn parse_api_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| DashError::Config(format!("invalid API base URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(DashError::Config(format!(
                "unsupported scheme '{}' in API base URL '{}', expected http or https",
                other, raw
            )));
        }
    }

    if url.cannot_be_a_base() {
        return Err(DashError::Config(format!(
            "API base URL '{}' cannot carry a path",
            raw
        )));
    }

    Ok(url)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

fn default_log_file() -> PathBuf {
    let file_name = format!("{}.log", APP_NAME);
    match project_dirs() {
        Some(dirs) => dirs.data_local_dir().join(file_name),
        None => env::temp_dir().join(file_name),
    }
}
