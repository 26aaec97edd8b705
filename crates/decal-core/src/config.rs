// Rust guideline compliant 2026-02-06

//! Configuration management for the decal workflow tools.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for the decal workflow tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether new orders use the custom-decal workflow unless told otherwise.
    #[serde(default)]
    pub default_custom_decal: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            default_custom_decal: false,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.decal/config.toml`
    /// 3. Environment variables with `DECAL_` prefix
    ///
    /// # Arguments
    ///
    /// * `decal_dir` - Path to the `.decal` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(decal_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = decal_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `DECAL_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `DECAL_LOG_LEVEL` - Log level
    /// - `DECAL_DEFAULT_CUSTOM_DECAL` - Default workflow for new orders (true/false)
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("DECAL_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "DECAL_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("DECAL_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("DECAL_DEFAULT_CUSTOM_DECAL") {
            self.default_custom_decal = val.parse().map_err(|_| {
                Error::Config("DECAL_DEFAULT_CUSTOM_DECAL must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.max_level().map(|_| ())
    }

    /// Returns the tracing level named by `log_level`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the level name is not recognized.
    pub fn max_level(&self) -> Result<Level> {
        parse_log_level(&self.log_level)
    }

    /// Saves the configuration to `config.toml` in `decal_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, decal_dir: &Path) -> Result<()> {
        let config_path = decal_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Parses a log level name (case-insensitive).
///
/// # Errors
///
/// Returns [`Error::Config`] for names other than error, warn, info and debug.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        other => Err(Error::Config(format!(
            "log_level must be error, warn, info, or debug, got {}",
            other
        ))),
    }
}
