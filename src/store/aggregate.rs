//! Per-event registration counts

use std::collections::HashMap;
use crate::models::{Event, Registration};
use crate::utils::logging;

/// Reset and recompute `registration_count` and `total_participants`
///
/// Registrations whose event is unknown are skipped. Returns how many were.
pub fn tally_registrations(events: &mut [Event], registrations: &[Registration]) -> usize {
    let mut index: HashMap<String, usize> = HashMap::with_capacity(events.len());
    for (position, event) in events.iter_mut().enumerate() {
        event.reset_counts();
        index.entry(event.id.clone()).or_insert(position);
    }

    let mut orphaned = 0;
    for registration in registrations {
        let event = index
            .get(registration.event_id.as_str())
            .and_then(|&position| events.get_mut(position));

        match event {
            Some(event) => {
                event.registration_count += 1;
                event.total_participants += registration.participant_count();
            }
            None => {
                orphaned += 1;
                logging::log_orphaned_registration(registration.id.as_deref(), &registration.event_id);
            }
        }
    }

    orphaned
}
