//! Local directory source

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::debug;
use super::{Collection, CollectionFiles, DataSource};
use crate::utils::errors::SourceError;

/// Reads the exports from files in one directory
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
    files: CollectionFiles,
}

impl FileSource {
    pub fn new(dir: impl AsRef<Path>, files: CollectionFiles) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            files,
        }
    }

    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.dir.join(self.files.file_name(collection))
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self, collection: Collection) -> Result<Value, SourceError> {
        let path = self.path_for(collection);
        debug!(collection = %collection, path = %path.display(), "Reading export file");

        let content = fs::read(&path)
            .await
            .map_err(|source| SourceError::Io { path: path.clone(), source })?;

        Ok(serde_json::from_slice(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_reads_json_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("events.json"), r#"[{"id": "e1", "title": "Hack"}]"#).unwrap();

        let source = FileSource::new(dir.path(), CollectionFiles::default());
        let value = source.fetch(Collection::Events).await.unwrap();
        assert_eq!(value[0]["id"], "e1");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path(), CollectionFiles::default());
        let err = source.fetch(Collection::Users).await.unwrap_err();
        assert_matches!(err, SourceError::Io { path, .. } if path.ends_with("users.json"));
    }

    #[tokio::test]
    async fn test_garbage_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("registrations.json"), "<html>").unwrap();
        let source = FileSource::new(dir.path(), CollectionFiles::default());
        assert_matches!(source.fetch(Collection::Registrations).await, Err(SourceError::Json(_)));
    }
}
