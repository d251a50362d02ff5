//! Plain-text rendering of the dashboard

use std::fmt::Write;
use crate::models::{DashboardStats, Event, EventRegistration};
use crate::utils::helpers::{format_registration_date, truncate_text};

const DESCRIPTION_LIMIT: usize = 120;

pub const NO_EVENTS_MESSAGE: &str = "No events found matching your filters.";
pub const NO_REGISTRATIONS_MESSAGE: &str = "No registrations yet";

/// Overview block with the four global counts
pub fn render_stats(stats: &DashboardStats) -> String {
    let rows = [
        ("Total Events", stats.total_events),
        ("Total Registrations", stats.total_registrations),
        ("Individual", stats.individual_registrations),
        ("Group", stats.group_registrations),
    ];

    let mut out = String::new();
    for (title, value) in rows {
        let _ = writeln!(out, "{:<20} {:>6}", title, value);
    }
    out
}

/// One event card
pub fn render_event(event: &Event) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", event.title);

    let mut badges: Vec<String> = Vec::new();
    badges.extend(event.event_type.clone());
    badges.extend(event.player_mode.clone());
    if let Some(team_size) = &event.team_size {
        badges.push(format!("Team: {}", team_size));
    }
    badges.extend(event.sub_category.clone());
    if !badges.is_empty() {
        let _ = writeln!(out, "[{}]", badges.join("] ["));
    }

    if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "{}", truncate_text(description, DESCRIPTION_LIMIT));
    }

    let _ = writeln!(out, "Registrations: {}", event.registration_count);
    let _ = writeln!(out, "Participants:  {}", event.total_participants);
    if !event.has_registrations() {
        let _ = writeln!(out, "{}", NO_REGISTRATIONS_MESSAGE);
    }
    out
}

/// The "Registered Users" list of one event
pub fn render_registrations(registrations: &[EventRegistration]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Registered Users");

    for (position, entry) in registrations.iter().enumerate() {
        let registration = &entry.registration;

        let mut header = format!("#{}", position + 1);
        if let Some(group_name) = registration.group_name() {
            let _ = write!(header, " {}", group_name);
        }
        if let Some(date) = registration.registration_date.as_deref() {
            let _ = write!(header, " ({})", format_registration_date(date));
        }
        let _ = writeln!(out, "{}", header);

        for (member, user) in entry.user_details.iter().enumerate() {
            let leader = registration.is_group() && member == 0;
            let _ = writeln!(out, "  - {}{}", user.name, if leader { " [Leader]" } else { "" });
            if let Some(username) = user.distinct_username() {
                let _ = writeln!(out, "    @{}", username);
            }
            if let Some(email) = &user.email {
                let _ = writeln!(out, "    {}", email);
            }
            if let Some(phone) = &user.phone {
                let _ = writeln!(out, "    {}", phone);
            }
        }
    }
    out
}

/// Stats followed by every selected event card
pub fn render_dashboard(stats: &DashboardStats, events: &[&Event]) -> String {
    let mut out = render_stats(stats);
    out.push('\n');

    if events.is_empty() {
        out.push_str(NO_EVENTS_MESSAGE);
        out.push('\n');
        return out;
    }

    for event in events {
        out.push_str(&render_event(event));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Registration, User};
    use serde_json::json;

    #[test]
    fn test_stats_block() {
        let stats = DashboardStats {
            total_events: 2,
            total_registrations: 5,
            individual_registrations: 3,
            group_registrations: 2,
        };
        let text = render_stats(&stats);
        assert!(text.lines().next().unwrap().starts_with("Total Events"));
        assert!(text.contains("Group"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_event_without_registrations() {
        let mut event = Event::new("e1", "Hack");
        event.event_type = Some("technical".to_string());
        event.player_mode = Some("single player".to_string());
        let text = render_event(&event);
        assert!(text.contains("[technical] [single player]"));
        assert!(text.contains(NO_REGISTRATIONS_MESSAGE));
    }

    #[test]
    fn test_group_leader_marked() {
        let registration: Registration = serde_json::from_value(json!({
            "eventId": "e1",
            "type": "group",
            "userIds": ["u1", "u2"],
            "groupName": "Team A",
            "registrationDate": "2024-01-05T09:30:00Z"
        }))
        .unwrap();
        let alice: User = serde_json::from_value(json!({"_id": "u1", "name": "Alice", "username": "ali"})).unwrap();
        let entry = EventRegistration {
            registration,
            user_details: vec![alice, User::placeholder("u2")],
        };

        let text = render_registrations(&[entry]);
        assert!(text.contains("#1 Team A (Jan 05, 2024, 09:30 AM)"));
        assert!(text.contains("- Alice [Leader]"));
        assert!(text.contains("@ali"));
        assert!(text.contains("- Unknown User\n"));
    }

    #[test]
    fn test_empty_selection() {
        let text = render_dashboard(&DashboardStats::default(), &[]);
        assert!(text.ends_with(&format!("{}\n", NO_EVENTS_MESSAGE)));
    }
}
