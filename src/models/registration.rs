//! Registration model
//!
//! A registration is either an individual sign-up with a single `userId` or a
//! group sign-up whose `userIds` list is non-empty and starts with the group
//! leader. Exports are loosely typed, so records are normalized from
//! [`RawRegistration`] at parse time. Records that fit neither shape are kept
//! as [`RegistrationKind::Unspecified`] rather than rejected.

use std::slice;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::export::{present, ExportValue};
use super::user::User;
use crate::utils::helpers::parse_timestamp;

pub const TYPE_INDIVIDUAL: &str = "individual";
pub const TYPE_GROUP: &str = "group";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRegistration", into = "RegistrationRecord")]
pub struct Registration {
    pub id: Option<String>,
    pub event_id: String,
    pub kind: RegistrationKind,
    pub registration_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationKind {
    Individual {
        user_id: String,
    },
    Group {
        /// Leader first, never empty
        user_ids: Vec<String>,
        group_name: Option<String>,
    },
    /// Missing or unknown `type`, or a declared type without its participants
    Unspecified {
        kind: Option<String>,
        user_id: Option<String>,
        group_name: Option<String>,
    },
}

/// Registration record as exported
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRegistration {
    #[serde(rename = "_id")]
    pub object_id: Option<ExportValue>,
    pub id: Option<ExportValue>,
    pub user_id: Option<ExportValue>,
    pub event_id: ExportValue,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub user_ids: Option<Vec<ExportValue>>,
    pub members: Option<Vec<ExportValue>>,
    pub group_name: Option<String>,
    pub registration_date: Option<ExportValue>,
}

/// Canonical flat shape written back out
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegistrationRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    event_id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    registration_date: Option<String>,
}

/// A registration joined with the users it references
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    #[serde(flatten)]
    pub registration: Registration,
    /// Parallel to [`Registration::participant_ids`]
    pub user_details: Vec<User>,
}

impl Registration {
    pub fn is_group(&self) -> bool {
        matches!(self.kind, RegistrationKind::Group { .. })
    }

    pub fn is_individual(&self) -> bool {
        matches!(self.kind, RegistrationKind::Individual { .. })
    }

    /// The `type` value, as declared or as inferred from the record's shape
    pub fn type_label(&self) -> Option<&str> {
        match &self.kind {
            RegistrationKind::Individual { .. } => Some(TYPE_INDIVIDUAL),
            RegistrationKind::Group { .. } => Some(TYPE_GROUP),
            RegistrationKind::Unspecified { kind, .. } => kind.as_deref(),
        }
    }

    /// Users to resolve, in registration order
    ///
    /// A single entry for individuals. An unspecified registration yields its
    /// `userId` when it has one.
    pub fn participant_ids(&self) -> &[String] {
        match &self.kind {
            RegistrationKind::Individual { user_id } => slice::from_ref(user_id),
            RegistrationKind::Group { user_ids, .. } => user_ids,
            RegistrationKind::Unspecified { user_id, .. } => match user_id {
                Some(user_id) => slice::from_ref(user_id),
                None => &[],
            },
        }
    }

    /// Participants added to the event total: the member count for groups, 1 otherwise
    pub fn participant_count(&self) -> usize {
        match &self.kind {
            RegistrationKind::Group { user_ids, .. } => user_ids.len(),
            _ => 1,
        }
    }

    /// First member of a group registration
    pub fn leader_id(&self) -> Option<&str> {
        match &self.kind {
            RegistrationKind::Group { user_ids, .. } => user_ids.first().map(String::as_str),
            _ => None,
        }
    }

    pub fn group_name(&self) -> Option<&str> {
        match &self.kind {
            RegistrationKind::Group { group_name, .. } => group_name.as_deref(),
            RegistrationKind::Unspecified { group_name, .. } => group_name.as_deref(),
            RegistrationKind::Individual { .. } => None,
        }
    }

    pub fn registration_timestamp(&self) -> Option<DateTime<Utc>> {
        self.registration_date.as_deref().and_then(parse_timestamp)
    }
}

impl From<RawRegistration> for Registration {
    fn from(raw: RawRegistration) -> Self {
        // `_id` takes precedence over a plain `id`
        let id = present(raw.object_id).or_else(|| present(raw.id));

        // userIds takes precedence over the older `members` field
        let participants: Vec<String> = raw
            .user_ids
            .or(raw.members)
            .unwrap_or_default()
            .into_iter()
            .map(ExportValue::into_plain)
            .collect();
        let user_id = present(raw.user_id);
        let group_name = raw.group_name.filter(|s| !s.is_empty());

        let kind = match (raw.kind.as_deref(), user_id) {
            (Some(TYPE_GROUP) | None, _) if !participants.is_empty() => RegistrationKind::Group {
                user_ids: participants,
                group_name,
            },
            (Some(TYPE_INDIVIDUAL) | None, Some(user_id)) => RegistrationKind::Individual { user_id },
            (kind, user_id) => RegistrationKind::Unspecified {
                kind: kind.map(str::to_string),
                user_id,
                group_name,
            },
        };

        Self {
            id,
            event_id: raw.event_id.into_plain(),
            kind,
            registration_date: present(raw.registration_date),
        }
    }
}

impl From<Registration> for RegistrationRecord {
    fn from(registration: Registration) -> Self {
        let kind = registration.type_label().map(str::to_string);
        let (user_id, user_ids, group_name) = match registration.kind {
            RegistrationKind::Individual { user_id } => (Some(user_id), None, None),
            RegistrationKind::Group { user_ids, group_name } => (None, Some(user_ids), group_name),
            RegistrationKind::Unspecified { user_id, group_name, .. } => (user_id, None, group_name),
        };

        Self {
            id: registration.id,
            event_id: registration.event_id,
            kind,
            user_id,
            user_ids,
            group_name,
            registration_date: registration.registration_date,
        }
    }
}
