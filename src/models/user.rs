//! User model
//!
//! Users are normalized from [`RawUser`] as soon as they are parsed, so the
//! rest of the crate only sees one canonical shape. A record without any
//! identifier cannot be looked up and does not normalize.

use serde::{Deserialize, Serialize};
use super::export::{present, ExportValue};
use crate::utils::errors::NormalizeError;
use crate::utils::helpers::id_suffix;

/// Display name given to users that cannot be resolved
pub const UNKNOWN_USER_NAME: &str = "Unknown User";

const SYNTHETIC_NAME_SUFFIX_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUser")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// User record as exported
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    #[serde(rename = "_id")]
    pub object_id: Option<ExportValue>,
    pub id: Option<ExportValue>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<ExportValue>,
    pub mobno: Option<ExportValue>,
}

impl User {
    /// Stand-in for an identifier that matches no known user
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: UNKNOWN_USER_NAME.to_string(),
            username: None,
            email: None,
            phone: None,
        }
    }

    /// Username worth showing next to the name, i.e. one that differs from it
    pub fn distinct_username(&self) -> Option<&str> {
        self.username.as_deref().filter(|username| *username != self.name)
    }
}

impl TryFrom<RawUser> for User {
    type Error = NormalizeError;

    fn try_from(raw: RawUser) -> Result<Self, Self::Error> {
        // `_id` takes precedence over a plain `id`
        let id = present(raw.object_id)
            .or_else(|| present(raw.id))
            .ok_or(NormalizeError::MissingUserId)?;
        let username = raw.username.filter(|s| !s.is_empty());

        // name > username > fullName > firstName > synthetic label
        let name = [raw.name, username.clone(), raw.full_name, raw.first_name]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.is_empty())
            .unwrap_or_else(|| format!("User {}", id_suffix(&id, SYNTHETIC_NAME_SUFFIX_LEN)));

        let phone = present(raw.phone).or_else(|| present(raw.mobno));

        Ok(Self {
            id,
            name,
            username,
            email: raw.email.filter(|s| !s.is_empty()),
            phone,
        })
    }
}
