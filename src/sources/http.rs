//! HTTP source for exports served as static files

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;
use super::{Collection, CollectionFiles, DataSource};
use crate::config::SourcesConfig;
use crate::utils::errors::SourceError;

/// Fetches the exports relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: Url,
    files: CollectionFiles,
}

impl HttpSource {
    /// Create a new HttpSource from the sources configuration
    pub fn new(config: &SourcesConfig, files: CollectionFiles) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("event-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::with_client(client, &config.base, files)
    }

    /// Use an already configured client
    pub fn with_client(client: Client, base: &str, files: CollectionFiles) -> Result<Self, SourceError> {
        let mut base_url = Url::parse(base)?;
        // Url::join replaces the last segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            files,
        })
    }

    pub fn url_for(&self, collection: Collection) -> Result<Url, SourceError> {
        Ok(self.base_url.join(self.files.file_name(collection))?)
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, collection: Collection) -> Result<Value, SourceError> {
        let url = self.url_for(collection)?;
        debug!(collection = %collection, url = %url, "Requesting export");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
