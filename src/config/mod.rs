//! Configuration management
//!
//! Host-side configuration for running an export. Configuration can be
//! loaded from:
//! - wxr-export.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::wxr::{ExportOptions, DEFAULT_WXR_VERSION};

/// Default configuration file name
pub const CONFIG_FILE: &str = "wxr-export.yml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Document rendering configuration
    #[serde(default)]
    pub export: ExportConfig,
    /// Delivery configuration
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

/// Document rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Value of `<wp:wxr_version>`
    #[serde(default = "default_wxr_version")]
    pub wxr_version: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            wxr_version: default_wxr_version(),
        }
    }
}

impl ExportConfig {
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            wxr_version: self.wxr_version.clone(),
        }
    }
}

fn default_wxr_version() -> String {
    DEFAULT_WXR_VERSION.to_string()
}

/// Delivery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Echo the document body instead of producing a download
    #[serde(default)]
    pub debug: bool,
    /// Download file name (default: wxr-YYYY-MM-DD.xml)
    #[serde(default)]
    pub filename: Option<String>,
    /// Directory the download is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            debug: false,
            filename: None,
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist or is empty, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                path: path.display().to_string(),
                message: format_yaml_error(&e),
            }
        })?;

        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables follow the pattern:
    /// - WXR_EXPORT_VERSION
    /// - WXR_EXPORT_DEBUG
    /// - WXR_EXPORT_FILENAME
    /// - WXR_EXPORT_OUTPUT_DIR
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(version) = std::env::var("WXR_EXPORT_VERSION") {
            if !version.trim().is_empty() {
                self.export.wxr_version = version;
            }
        }

        if let Ok(debug) = std::env::var("WXR_EXPORT_DEBUG") {
            match debug.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.delivery.debug = true,
                "0" | "false" | "no" | "off" => self.delivery.debug = false,
                _ => {} // Ignore invalid values
            }
        }
        if let Ok(filename) = std::env::var("WXR_EXPORT_FILENAME") {
            self.delivery.filename = Some(filename);
        }
        if let Ok(dir) = std::env::var("WXR_EXPORT_OUTPUT_DIR") {
            self.delivery.output_dir = PathBuf::from(dir);
        }
    }
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared mutex for all config tests that modify environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
const ENV_VARS: [&str; 4] = [
    "WXR_EXPORT_VERSION",
    "WXR_EXPORT_DEBUG",
    "WXR_EXPORT_FILENAME",
    "WXR_EXPORT_OUTPUT_DIR",
];
