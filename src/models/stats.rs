//! Dashboard statistics model

use serde::{Deserialize, Serialize};
use super::{Event, Registration};

/// Snapshot of the global counts shown on the dashboard overview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_events: usize,
    pub total_registrations: usize,
    pub individual_registrations: usize,
    pub group_registrations: usize,
}

impl DashboardStats {
    /// Count over the given collections
    ///
    /// Orphaned registrations are included. Registrations of unspecified type
    /// count towards the total only.
    pub fn from_collections(events: &[Event], registrations: &[Registration]) -> Self {
        Self {
            total_events: events.len(),
            total_registrations: registrations.len(),
            individual_registrations: registrations.iter().filter(|r| r.is_individual()).count(),
            group_registrations: registrations.iter().filter(|r| r.is_group()).count(),
        }
    }
}
