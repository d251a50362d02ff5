//! Dashboard presentation
//!
//! Filtering, ordering and text rendering of the data store's query results.
//! None of this touches the store's state.

pub mod render;

use std::cmp::Ordering;
use serde::{Deserialize, Serialize};
use crate::models::Event;

/// Which events to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventFilter {
    #[default]
    All,
    Technical,
    NonTech,
}

/// How to order the shown events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most registrations first
    #[default]
    Registrations,
    /// Alphabetical by title
    Name,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Technical => event.is_technical(),
            EventFilter::NonTech => event.is_non_tech(),
        }
    }
}

impl SortBy {
    pub fn compare(&self, a: &Event, b: &Event) -> Ordering {
        match self {
            SortBy::Registrations => b.registration_count.cmp(&a.registration_count),
            SortBy::Name => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title)),
        }
    }
}

/// Filter then sort; ties keep source order
pub fn select_events(events: &[Event], filter: EventFilter, sort_by: SortBy) -> Vec<&Event> {
    let mut selected: Vec<&Event> = events.iter().filter(|event| filter.matches(event)).collect();
    selected.sort_by(|a, b| sort_by.compare(a, b));
    selected
}
