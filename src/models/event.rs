//! Event model

use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const EVENT_TYPE_TECHNICAL: &str = "technical";
pub const EVENT_TYPE_NON_TECH: &str = "non-tech";
pub const PLAYER_MODE_SINGLE: &str = "single player";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_mode: Option<String>,
    #[serde(rename = "teamsize", default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<TeamSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// Recomputed on every load
    #[serde(default)]
    pub registration_count: usize,
    /// Recomputed on every load
    #[serde(default)]
    pub total_participants: usize,
    /// Fields the dashboard does not interpret, kept as exported
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Team size as exported, either a count or a label such as `"2-4"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamSize {
    Count(u64),
    Label(String),
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSize::Count(n) => write!(f, "{}", n),
            TeamSize::Label(label) => write!(f, "{}", label),
        }
    }
}

impl Event {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            event_type: None,
            player_mode: None,
            team_size: None,
            sub_category: None,
            registration_count: 0,
            total_participants: 0,
            extra: Map::new(),
        }
    }

    pub fn is_technical(&self) -> bool {
        self.event_type.as_deref() == Some(EVENT_TYPE_TECHNICAL)
    }

    pub fn is_non_tech(&self) -> bool {
        self.event_type.as_deref() == Some(EVENT_TYPE_NON_TECH)
    }

    pub fn is_single_player(&self) -> bool {
        self.player_mode.as_deref() == Some(PLAYER_MODE_SINGLE)
    }

    pub fn has_registrations(&self) -> bool {
        self.registration_count > 0
    }

    /// Zero the derived counters ahead of an aggregation pass
    pub fn reset_counts(&mut self) {
        self.registration_count = 0;
        self.total_participants = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_event_defaults_counts() {
        let event: Event = serde_json::from_value(json!({"id": "e1", "title": "Hack"})).unwrap();
        assert_eq!(event, Event::new("e1", "Hack"));
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let raw = json!({
            "id": "e2",
            "title": "Quiz",
            "eventType": "non-tech",
            "playerMode": "team",
            "teamsize": "2-4",
            "venue": "Hall B"
        });
        let event: Event = serde_json::from_value(raw).unwrap();
        assert!(event.is_non_tech());
        assert!(!event.is_single_player());
        assert_eq!(event.team_size, Some(TeamSize::Label("2-4".to_string())));
        assert_eq!(event.extra.get("venue"), Some(&json!("Hall B")));

        let written = serde_json::to_value(&event).unwrap();
        assert_eq!(written["venue"], json!("Hall B"));
        assert_eq!(written["teamsize"], json!("2-4"));
        assert_eq!(written["registrationCount"], json!(0));
    }

    #[test]
    fn test_numeric_team_size() {
        let event: Event = serde_json::from_value(json!({"id": "e3", "teamsize": 4})).unwrap();
        assert_eq!(event.team_size.map(|t| t.to_string()), Some("4".to_string()));
    }
}
