//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from defaults, config files and environment variables.

use serde::{Deserialize, Serialize};
use crate::dashboard::{EventFilter, SortBy};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub sources: SourcesConfig,
    pub logging: LoggingConfig,
    pub dashboard: DashboardConfig,
}

/// Where the three exports are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    File,
    Http,
}

/// Data source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourcesConfig {
    pub kind: SourceKind,
    /// Directory for `file`, base URL for `http`
    pub base: String,
    pub events_file: String,
    pub users_file: String,
    pub registrations_file: String,
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
}

/// Report presentation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    pub filter: EventFilter,
    pub sort_by: SortBy,
    pub show_registrations: bool,
}

impl Settings {
    /// Load settings from defaults, configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings using a specific configuration file name
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name(name).required(false))
            .add_source(
                config::Environment::with_prefix("EVENTDASH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::DashboardError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sources: SourcesConfig {
                kind: SourceKind::File,
                base: "data".to_string(),
                events_file: "events.json".to_string(),
                users_file: "users.json".to_string(),
                registrations_file: "registrations.json".to_string(),
                timeout_seconds: 10,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
                file_path: None,
            },
            dashboard: DashboardConfig {
                filter: EventFilter::All,
                sort_by: SortBy::Registrations,
                show_registrations: false,
            },
        }
    }
}
