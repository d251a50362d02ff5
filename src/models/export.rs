//! Export wrapper shapes
//!
//! Database exports wrap identifiers and dates in single-key objects such as
//! `{"$oid": "..."}` or `{"$date": "..."}`. [`ExportValue`] accepts those
//! and the plain forms, so records can be unwrapped during normalization.

use serde::Deserialize;

/// A scalar as it may appear in an export
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExportValue {
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
    Date {
        #[serde(rename = "$date")]
        date: Box<ExportValue>,
    },
    NumberLong {
        #[serde(rename = "$numberLong")]
        value: String,
    },
    Text(String),
    Number(serde_json::Number),
}

impl ExportValue {
    /// Unwrap to the canonical string value
    pub fn into_plain(self) -> String {
        match self {
            ExportValue::ObjectId { oid } => oid,
            ExportValue::Date { date } => date.into_plain(),
            ExportValue::NumberLong { value } => value,
            ExportValue::Text(text) => text,
            ExportValue::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for ExportValue {
    fn from(value: &str) -> Self {
        ExportValue::Text(value.to_string())
    }
}

/// Unwrap an optional value, treating an empty string as absent
pub(crate) fn present(value: Option<ExportValue>) -> Option<String> {
    value.map(ExportValue::into_plain).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ExportValue {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_unwraps_object_id() {
        assert_eq!(parse(json!({"$oid": "65a1f0"})).into_plain(), "65a1f0");
    }

    #[test]
    fn test_unwraps_nested_date() {
        assert_eq!(parse(json!({"$date": "2024-01-01"})).into_plain(), "2024-01-01");
        assert_eq!(
            parse(json!({"$date": {"$numberLong": "1704067200000"}})).into_plain(),
            "1704067200000"
        );
    }

    #[test]
    fn test_plain_values_pass_through() {
        assert_eq!(parse(json!("u1")).into_plain(), "u1");
        assert_eq!(parse(json!(9876543210u64)).into_plain(), "9876543210");
    }

    #[test]
    fn test_present_skips_empty_strings() {
        assert_eq!(present(Some(ExportValue::from(""))), None);
        assert_eq!(present(None), None);
        assert_eq!(present(Some(ExportValue::from("x"))), Some("x".to_string()));
    }

    #[test]
    fn test_rejects_unrelated_objects() {
        assert!(serde_json::from_value::<ExportValue>(json!({"id": 1})).is_err());
    }
}
