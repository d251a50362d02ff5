//! Data source wrapper that counts fetches and can fail on demand

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use event_dashboard::sources::{Collection, DataSource, MemorySource};
use event_dashboard::utils::errors::SourceError;
use serde_json::Value;

/// Wraps a [`MemorySource`], failing the next N fetches of chosen collections
pub struct FlakySource {
    inner: MemorySource,
    failures: Mutex<HashMap<Collection, usize>>,
    calls: Mutex<HashMap<Collection, usize>>,
    total_calls: AtomicUsize,
    delay: Option<Duration>,
}

impl FlakySource {
    pub fn new(inner: MemorySource) -> Self {
        Self {
            inner,
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(HashMap::new()),
            total_calls: AtomicUsize::new(0),
            delay: None,
        }
    }

    /// Delay every fetch, so concurrent callers overlap
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail the next `times` fetches of `collection`
    pub fn fail_next(&self, collection: Collection, times: usize) {
        self.failures.lock().unwrap().insert(collection, times);
    }

    pub fn calls(&self, collection: Collection) -> usize {
        self.calls.lock().unwrap().get(&collection).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.total_calls.load(Ordering::SeqCst)
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl DataSource for FlakySource {
    async fn fetch(&self, collection: Collection) -> Result<Value, SourceError> {
        self.total_calls.fetch_add(1, Ordering::SeqCst);
        *self.calls.lock().unwrap().entry(collection).or_insert(0) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let should_fail = {
            let mut failures = self.failures.lock().unwrap();
            match failures.get_mut(&collection) {
                Some(remaining) if *remaining > 0 => {
                    *remaining -= 1;
                    true
                }
                _ => false,
            }
        };
        if should_fail {
            return Err(SourceError::Missing(collection));
        }

        self.inner.fetch(collection).await
    }
}
