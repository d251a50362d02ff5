//! In-memory source for fixtures

use std::collections::HashMap;
use async_trait::async_trait;
use serde_json::Value;
use super::{Collection, DataSource};
use crate::utils::errors::SourceError;

/// Serves fixed JSON values; a collection that was never set is reported missing
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: HashMap<Collection, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source with all three collections
    pub fn with_collections(events: Value, users: Value, registrations: Value) -> Self {
        Self::new()
            .with(Collection::Events, events)
            .with(Collection::Users, users)
            .with(Collection::Registrations, registrations)
    }

    pub fn with(mut self, collection: Collection, value: Value) -> Self {
        self.collections.insert(collection, value);
        self
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn fetch(&self, collection: Collection) -> Result<Value, SourceError> {
        self.collections
            .get(&collection)
            .cloned()
            .ok_or(SourceError::Missing(collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_serves_configured_collections_only() {
        let source = MemorySource::new().with(Collection::Events, json!([]));
        assert_eq!(source.fetch(Collection::Events).await.unwrap(), json!([]));
        assert!(matches!(
            source.fetch(Collection::Users).await,
            Err(SourceError::Missing(Collection::Users))
        ));
    }
}
