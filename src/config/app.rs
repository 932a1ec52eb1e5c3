//! Main application configuration
//!
//! This module defines the configuration structures for the ladder tool,
//! including TOML file loading, environment variable overrides and validation.

use crate::config::constants::DEFAULT_DATE_FORMAT;
use crate::error::LadderError;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Write;
use std::path::Path;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub input: InputSettings,
    pub output: OutputSettings,
}

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// How input files are read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// chrono format of the dates in the game log
    pub date_format: String,
}

/// How the report is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Report format
    pub format: OutputFormat,
    /// Report title
    pub title: String,
    /// chrono format of the dates in the game log section
    pub date_format: String,
    /// List the most recent game first in the game log section
    pub newest_first: bool,
    /// Only show this many ladder rows
    pub top: Option<usize>,
}

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Markdown,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "plain" | "text" | "txt" => Ok(OutputFormat::Plain),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown output format: {}", value)),
        }
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "elo-ladder".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            title: "Ladder".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            newest_first: false,
            top: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, then apply environment overrides
    ///
    /// Keys missing from the file keep their defaults. Values are not
    /// validated here; callers run [`validate_config`] once overrides are in.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a TOML document without touching the environment
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            LadderError::ConfigurationError {
                message: format!("Invalid config file: {}", e),
            }
            .into()
        })
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        if let Ok(date_format) = env::var("LADDER_INPUT_DATE_FORMAT") {
            self.input.date_format = date_format;
        }

        if let Ok(format) = env::var("LADDER_FORMAT") {
            self.output.format = format
                .parse()
                .map_err(|_| anyhow!("Invalid LADDER_FORMAT value: {}", format))?;
        }
        if let Ok(title) = env::var("LADDER_TITLE") {
            self.output.title = title;
        }
        if let Ok(date_format) = env::var("LADDER_DATE_FORMAT") {
            self.output.date_format = date_format;
        }
        if let Ok(newest_first) = env::var("LADDER_NEWEST_FIRST") {
            self.output.newest_first = newest_first
                .parse()
                .map_err(|_| anyhow!("Invalid LADDER_NEWEST_FIRST value: {}", newest_first))?;
        }
        if let Ok(top) = env::var("LADDER_TOP") {
            self.output.top = Some(
                top.parse()
                    .map_err(|_| anyhow!("Invalid LADDER_TOP value: {}", top))?,
            );
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => {
            return Err(configuration_error(format!(
                "Invalid log level: {}",
                config.service.log_level
            )))
        }
    }

    validate_date_format("input.date_format", &config.input.date_format, true)?;
    validate_date_format("output.date_format", &config.output.date_format, false)?;

    if config.output.top == Some(0) {
        return Err(configuration_error(
            "Top row limit must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Reject formats chrono cannot render a calendar date with
///
/// Input formats must also parse their own output back to the same date.
fn validate_date_format(key: &str, format: &str, must_parse: bool) -> Result<()> {
    if format.trim().is_empty() {
        return Err(configuration_error(format!("{} cannot be empty", key)));
    }

    let probe = NaiveDate::from_ymd_opt(2001, 2, 3).ok_or_else(|| anyhow!("Invalid probe date"))?;
    let mut rendered = String::new();
    if write!(rendered, "{}", probe.format(format)).is_err() {
        return Err(configuration_error(format!(
            "{} is not a valid date format: {}",
            key, format
        )));
    }

    if must_parse && NaiveDate::parse_from_str(&rendered, format).ok() != Some(probe) {
        return Err(configuration_error(format!(
            "{} cannot be used to read dates: {}",
            key, format
        )));
    }

    Ok(())
}

fn configuration_error(message: String) -> anyhow::Error {
    LadderError::ConfigurationError { message }.into()
}
