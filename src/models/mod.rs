//! Data models module
//!
//! This module contains the canonical records the dashboard works with and
//! the raw export shapes they are normalized from.

pub mod export;
pub mod event;
pub mod user;
pub mod registration;
pub mod stats;

// Re-export commonly used models
pub use export::ExportValue;
pub use event::{Event, TeamSize};
pub use user::{User, RawUser, UNKNOWN_USER_NAME};
pub use registration::{Registration, RegistrationKind, RawRegistration, EventRegistration};
pub use stats::DashboardStats;
