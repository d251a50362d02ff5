//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{DashboardError, Result};
use super::{Settings, SourceKind};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_sources_config(&settings.sources)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate data source configuration
fn validate_sources_config(config: &super::SourcesConfig) -> Result<()> {
    if config.base.is_empty() {
        return Err(DashboardError::Config(
            "Data source base location is required".to_string()
        ));
    }

    let files = [
        ("events", &config.events_file),
        ("users", &config.users_file),
        ("registrations", &config.registrations_file),
    ];
    for (collection, file) in files {
        if file.is_empty() {
            return Err(DashboardError::Config(
                format!("File name for {} is required", collection)
            ));
        }
    }

    if config.kind == SourceKind::Http {
        if config.timeout_seconds == 0 {
            return Err(DashboardError::Config(
                "HTTP timeout must be greater than 0".to_string()
            ));
        }

        url::Url::parse(&config.base).map_err(|e| {
            DashboardError::Config(format!("Invalid base URL {}: {}", config.base, e))
        })?;
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(DashboardError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(DashboardError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if matches!(config.file_path.as_deref(), Some("")) {
        return Err(DashboardError::Config(
            "Log file path must not be empty when set".to_string()
        ));
    }

    Ok(())
}
