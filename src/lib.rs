//! Event Dashboard
//!
//! Registration statistics for a set of events, built from three JSON
//! exports (events, users, registrations). The library normalizes the
//! exports, joins them and computes the counts the dashboard shows.

pub mod config;
pub mod models;
pub mod sources;
pub mod store;
pub mod dashboard;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{DashboardError, LoadError, Result};

// Re-export main components for easy access
pub use models::{DashboardStats, Event, EventRegistration, Registration, User};
pub use sources::{Collection, DataSource};
pub use store::DataStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
