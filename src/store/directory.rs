//! User lookup by identifier

use std::collections::HashMap;
use crate::models::{Registration, User};

/// Users indexed by exact identifier; the first record wins on duplicates
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    index: HashMap<String, usize>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        let mut index = HashMap::with_capacity(users.len());
        for (position, user) in users.iter().enumerate() {
            index.entry(user.id.clone()).or_insert(position);
        }
        Self { users, index }
    }

    pub fn find(&self, id: &str) -> Option<&User> {
        self.index.get(id).and_then(|&position| self.users.get(position))
    }

    /// The known user, or a placeholder carrying the unresolved id
    pub fn resolve(&self, id: &str) -> User {
        self.find(id).cloned().unwrap_or_else(|| User::placeholder(id))
    }

    /// Users of a registration, parallel to its participant ids
    pub fn resolve_participants(&self, registration: &Registration) -> Vec<User> {
        registration
            .participant_ids()
            .iter()
            .map(|id| self.resolve(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn directory() -> UserDirectory {
        let users: Vec<User> = serde_json::from_value(json!([
            {"_id": "u1", "username": "alice"},
            {"_id": "u2", "name": "Bob"},
            {"_id": "u1", "username": "impostor"}
        ]))
        .unwrap();
        UserDirectory::new(users)
    }

    #[test]
    fn test_first_record_wins() {
        let dir = directory();
        assert_eq!(dir.len(), 3);
        assert_eq!(dir.find("u1").map(|u| u.name.as_str()), Some("alice"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let dir = directory();
        assert!(dir.find("U1").is_none());
        assert!(dir.find("u1 ").is_none());
    }

    #[test]
    fn test_resolve_participants_substitutes_placeholder() {
        let registration: Registration = serde_json::from_value(json!({
            "eventId": "e1", "type": "group", "userIds": ["u2", "u9", "u1"]
        }))
        .unwrap();
        let users = directory().resolve_participants(&registration);
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Unknown User", "alice"]);
        assert_eq!(users[1].id, "u9");
    }
}
