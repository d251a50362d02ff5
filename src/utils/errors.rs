//! Error handling for the event dashboard
//!
//! This module defines the error types used throughout the application.
//! Source and parse failures are collected under [`LoadError`], which is the
//! only error the data store's queries can return.

use std::path::PathBuf;
use thiserror::Error;
use crate::sources::Collection;

/// Main error type for the event dashboard application
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to load dashboard data: {0}")]
    Load(#[from] LoadError),

    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),
}

/// Failure of a single `load()` attempt
///
/// Nothing from the failed attempt is retained, so the caller can retry by
/// invoking the query again.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to fetch {collection}: {source}")]
    Fetch {
        collection: Collection,
        #[source]
        source: SourceError,
    },

    #[error("failed to parse {collection}: {source}")]
    Parse {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

/// Data source specific errors
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("no data available for {0}")]
    Missing(Collection),
}

/// Record that cannot be normalized into a canonical shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("user record has no identifier")]
    MissingUserId,
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Result type alias for data store queries
pub type LoadResult<T> = std::result::Result<T, LoadError>;

impl LoadError {
    /// The collection whose fetch or parse failed
    pub fn collection(&self) -> Collection {
        match self {
            LoadError::Fetch { collection, .. } => *collection,
            LoadError::Parse { collection, .. } => *collection,
        }
    }

    /// Whether retrying the load can succeed without changing the data
    pub fn is_retryable(&self) -> bool {
        match self {
            LoadError::Fetch { source, .. } => source.is_transient(),
            LoadError::Parse { .. } => false,
        }
    }
}

impl SourceError {
    /// Check if the failure may clear up on its own
    pub fn is_transient(&self) -> bool {
        match self {
            SourceError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            SourceError::Status { status, .. } => *status >= 500 || *status == 429,
            SourceError::Io { .. } => true,
            SourceError::Json(_) => false,
            SourceError::Url(_) => false,
            SourceError::Missing(_) => true,
        }
    }
}
