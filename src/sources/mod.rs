//! Data sources module
//!
//! The data store never reads files or URLs itself. It asks a [`DataSource`]
//! for each of the three collections and receives parsed JSON back.

pub mod file;
pub mod http;
pub mod memory;

pub use file::FileSource;
pub use http::HttpSource;
pub use memory::MemorySource;

use std::fmt;
use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use crate::config::{SourceKind, SourcesConfig};
use crate::utils::errors::{Result, SourceError};

/// The three exports the dashboard is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Events,
    Users,
    Registrations,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Events, Collection::Users, Collection::Registrations];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Users => "users",
            Collection::Registrations => "registrations",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File names of the three exports relative to a source's base location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFiles {
    pub events: String,
    pub users: String,
    pub registrations: String,
}

impl CollectionFiles {
    pub fn file_name(&self, collection: Collection) -> &str {
        match collection {
            Collection::Events => &self.events,
            Collection::Users => &self.users,
            Collection::Registrations => &self.registrations,
        }
    }
}

impl Default for CollectionFiles {
    fn default() -> Self {
        Self {
            events: "events.json".to_string(),
            users: "users.json".to_string(),
            registrations: "registrations.json".to_string(),
        }
    }
}

impl From<&SourcesConfig> for CollectionFiles {
    fn from(config: &SourcesConfig) -> Self {
        Self {
            events: config.events_file.clone(),
            users: config.users_file.clone(),
            registrations: config.registrations_file.clone(),
        }
    }
}

/// Fetch capability injected into the data store
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Retrieve one collection as parsed JSON
    async fn fetch(&self, collection: Collection) -> std::result::Result<Value, SourceError>;
}

/// Build the source described by configuration
pub fn from_config(config: &SourcesConfig) -> Result<Arc<dyn DataSource>> {
    let files = CollectionFiles::from(config);
    let source: Arc<dyn DataSource> = match config.kind {
        SourceKind::File => Arc::new(FileSource::new(&config.base, files)),
        SourceKind::Http => Arc::new(HttpSource::new(config, files)?),
    };
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_collection_names() {
        let names: Vec<String> = Collection::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["events", "users", "registrations"]);
    }

    #[test]
    fn test_files_from_config() {
        let mut config = Settings::default().sources;
        config.users_file = "people.json".to_string();
        let files = CollectionFiles::from(&config);
        assert_eq!(files.file_name(Collection::Users), "people.json");
        assert_eq!(files.file_name(Collection::Events), "events.json");
    }

    #[tokio::test]
    async fn test_from_config_builds_http_source() {
        let mut config = Settings::default().sources;
        config.kind = SourceKind::Http;
        config.base = "http://127.0.0.1:9/data/".to_string();
        assert!(from_config(&config).is_ok());

        config.base = "::".to_string();
        assert!(from_config(&config).is_err());
    }
}
