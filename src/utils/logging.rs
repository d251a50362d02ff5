//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the event dashboard.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::sources::Collection;
use crate::utils::errors::{DashboardError, LoadError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the log file on drop and must be held for the
/// lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| DashboardError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let stdout_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.file_path {
        Some(path) => {
            let file_appender = tracing_appender::rolling::daily(path, "event-dashboard.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(non_blocking).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| DashboardError::Config(format!("Failed to install logger: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed fetch of one collection
pub fn log_fetch(collection: Collection, records: usize, duration_ms: u64) {
    debug!(
        collection = %collection,
        records = records,
        duration_ms = duration_ms,
        "Collection fetched"
    );
}

/// Log a successful load of all three collections
pub fn log_load_completed(events: usize, users: usize, registrations: usize, orphaned: usize, duration_ms: u64) {
    info!(
        events = events,
        users = users,
        registrations = registrations,
        orphaned = orphaned,
        duration_ms = duration_ms,
        "Dashboard data loaded"
    );
}

/// Log a failed load attempt
pub fn log_load_failed(err: &LoadError, duration_ms: u64) {
    if err.is_retryable() {
        warn!(
            collection = %err.collection(),
            error = %err,
            duration_ms = duration_ms,
            "Dashboard data load failed, retry possible"
        );
    } else {
        error!(
            collection = %err.collection(),
            error = %err,
            duration_ms = duration_ms,
            "Dashboard data load failed"
        );
    }
}

/// Log a registration that references no known event
pub fn log_orphaned_registration(registration_id: Option<&str>, event_id: &str) {
    debug!(
        registration_id = registration_id,
        event_id = event_id,
        "Registration references unknown event, skipped"
    );
}

/// Log registrations kept although their type could not be determined
pub fn log_unspecified_registrations(count: usize) {
    warn!(count = count, "Registrations without a recognised type, counted in totals only");
}

/// Log user records dropped for lack of an identifier
pub fn log_skipped_users(count: usize) {
    warn!(count = count, "User records without an identifier, skipped");
}
