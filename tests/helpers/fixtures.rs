//! JSON fixtures shaped like the real exports

use serde_json::{json, Value};

pub fn hackathon_events() -> Value {
    json!([
        {
            "id": "e1",
            "title": "Hack",
            "description": "24 hour hackathon",
            "eventType": "technical",
            "playerMode": "team",
            "teamsize": 4
        },
        {
            "id": "e2",
            "title": "Quiz",
            "eventType": "non-tech",
            "playerMode": "single player"
        },
        {
            "id": "e3",
            "title": "Art Jam",
            "eventType": "non-tech",
            "playerMode": "single player",
            "subCategory": "design"
        }
    ])
}

/// Users in export form, with wrapped ids and the alternate phone field
pub fn exported_users() -> Value {
    json!([
        {"_id": {"$oid": "u1"}, "username": "alice", "email": "alice@example.com", "mobno": "555-0101"},
        {"_id": {"$oid": "u2"}, "fullName": "Bob Builder", "phone": 5550102},
        {"_id": {"$oid": "65a1f0c2d4e5f6a7b8c9d0e1"}}
    ])
}

/// Registrations in export form covering every shape the normalizer accepts
pub fn exported_registrations() -> Value {
    json!([
        {
            "_id": {"$oid": "r1"},
            "eventId": {"$oid": "e1"},
            "type": "group",
            "members": [{"$oid": "u1"}, {"$oid": "u2"}, {"$oid": "u404"}],
            "groupName": "Team A",
            "registrationDate": {"$date": "2024-01-05T09:30:00Z"}
        },
        {
            "_id": {"$oid": "r2"},
            "eventId": {"$oid": "e2"},
            "userId": {"$oid": "65a1f0c2d4e5f6a7b8c9d0e1"},
            "type": "individual",
            "registrationDate": {"$date": {"$numberLong": "1704067200000"}}
        },
        {
            "_id": "r3",
            "eventId": "e1",
            "userId": "u2",
            "type": "individual",
            "registrationDate": "2024-01-06T12:00:00Z"
        },
        {
            "_id": "r4",
            "eventId": "e404",
            "userIds": ["u1"],
            "type": "group",
            "groupName": "Lost"
        }
    ])
}
