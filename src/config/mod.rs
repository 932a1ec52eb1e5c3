//! Configuration management for the ladder tool
//!
//! This module handles configuration loading from TOML files and environment
//! variables, validation, default values, and the fixed constants of the
//! rating model and report layout.

pub mod app;
pub mod constants;

// Re-export commonly used types
pub use app::{
    validate_config, AppConfig, InputSettings, OutputFormat, OutputSettings, ServiceSettings,
};
