//! Configuration commands.
//!
//! - `config show`: Display the effective settings and where they came from
//! - `config set`: Write a value to the config file

use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::{API_BASE_ENV, Config, Settings, parse_api_base};
use crate::error::{DashError, Result};

const VALID_KEYS: &[&str] = &["api_base", "log_file"];

/// Show the effective configuration
pub fn cmd_config_show(
    config_path: Option<&Path>,
    settings: &Settings,
    output: OutputOptions,
) -> Result<()> {
    let path_display = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no config directory)".to_string());

    let json_output = json!({
        "api_base": settings.api_base.as_str(),
        "log_file": settings.log_file.display().to_string(),
        "config_file": path_display,
    });

    let mut text = String::new();
    text.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text.push_str(&format!("{}: {}\n", "api_base".cyan(), settings.api_base));
    text.push_str(&format!(
        "{}: {}\n",
        "log_file".cyan(),
        settings.log_file.display()
    ));
    text.push('\n');
    text.push_str(&format!(
        "{}",
        format!("Config file: {} (overridden by {} and --api-base)", path_display, API_BASE_ENV)
            .dimmed()
    ));

    CommandOutput::new(json_output).with_text(text).print(output)
}

/// Set a configuration value in the config file at `config_path`
pub fn cmd_config_set(
    config_path: Option<&Path>,
    key: &str,
    value: &str,
    output: OutputOptions,
) -> Result<()> {
    let path = config_path
        .ok_or_else(|| DashError::Config("no config directory; pass --config <path>".to_string()))?;
    let mut config = Config::load_from(path)?;

    match key {
        "api_base" => {
            // Validate before writing so a bad value never reaches the file
            let url = parse_api_base(value)?;
            config.api_base = Some(url.to_string());
        }
        "log_file" => config.log_file = Some(PathBuf::from(value)),
        _ => {
            return Err(DashError::Config(format!(
                "invalid config key '{}'. Must be one of: {}",
                key,
                VALID_KEYS.join(", ")
            )));
        }
    }

    config.save_to(path)?;

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": value,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.cyan(), value))
    .print(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_writes_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        cmd_config_set(Some(&path), "api_base", "https://support.example.com", OutputOptions::default())
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_base.as_deref(), Some("https://support.example.com/"));
    }

    #[test]
    fn test_set_rejects_invalid_url() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let result = cmd_config_set(Some(&path), "api_base", "ftp://nope", OutputOptions::default());
        assert!(matches!(result, Err(DashError::Config(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let result = cmd_config_set(Some(&path), "token", "x", OutputOptions::default());
        assert!(matches!(result, Err(DashError::Config(msg)) if msg.contains("api_base")));
    }
}
