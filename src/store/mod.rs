//! In-memory data store
//!
//! [`DataStore`] loads the events, users and registrations exports once,
//! normalizes them into canonical records, computes the per-event counts and
//! answers the dashboard queries from memory.
//!
//! Loading is lazy and shared. Every query waits for the first successful
//! load; concurrent callers join the attempt already in flight instead of
//! fetching again. A failed attempt stores nothing, so the next query starts
//! a fresh load of all three collections.

pub mod aggregate;
pub mod directory;

pub use directory::UserDirectory;

use std::sync::Arc;
use std::time::Instant;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use crate::models::{DashboardStats, Event, EventRegistration, RawUser, Registration, User};
use crate::sources::{Collection, DataSource};
use crate::utils::errors::{LoadError, LoadResult};
use crate::utils::logging;

/// Normalized collections of one successful load
#[derive(Debug, Clone)]
struct Collections {
    events: Vec<Event>,
    users: UserDirectory,
    registrations: Vec<Registration>,
    orphaned: usize,
}

/// Dashboard data store
pub struct DataStore {
    source: Arc<dyn DataSource>,
    state: OnceCell<Collections>,
}

impl DataStore {
    /// Create a new DataStore reading from the given source
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            state: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state.initialized()
    }

    /// Load all three collections unless already loaded
    pub async fn load(&self) -> LoadResult<()> {
        self.collections().await.map(|_| ())
    }

    /// All events in source order with their counts populated
    pub async fn get_events(&self) -> LoadResult<&[Event]> {
        Ok(&self.collections().await?.events)
    }

    /// Global counts, computed from the loaded collections on each call
    pub async fn get_stats(&self) -> LoadResult<DashboardStats> {
        let collections = self.collections().await?;
        Ok(DashboardStats::from_collections(&collections.events, &collections.registrations))
    }

    /// Registrations of one event in source order, joined with their users
    ///
    /// An unknown event id yields an empty list.
    pub async fn get_event_registrations(&self, event_id: &str) -> LoadResult<Vec<EventRegistration>> {
        let collections = self.collections().await?;

        Ok(collections
            .registrations
            .iter()
            .filter(|registration| registration.event_id == event_id)
            .map(|registration| EventRegistration {
                registration: registration.clone(),
                user_details: collections.users.resolve_participants(registration),
            })
            .collect())
    }

    pub async fn get_event(&self, event_id: &str) -> LoadResult<Option<&Event>> {
        let collections = self.collections().await?;
        Ok(collections.events.iter().find(|event| event.id == event_id))
    }

    pub async fn find_user(&self, user_id: &str) -> LoadResult<Option<&User>> {
        Ok(self.collections().await?.users.find(user_id))
    }

    /// Registrations whose event id matched no event on the last load
    pub async fn orphaned_registrations(&self) -> LoadResult<usize> {
        Ok(self.collections().await?.orphaned)
    }

    async fn collections(&self) -> LoadResult<&Collections> {
        self.state.get_or_try_init(|| self.fetch_all()).await
    }

    async fn fetch_all(&self) -> LoadResult<Collections> {
        let started = Instant::now();
        let result = self.fetch_and_tally().await;
        let duration_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(collections) => logging::log_load_completed(
                collections.events.len(),
                collections.users.len(),
                collections.registrations.len(),
                collections.orphaned,
                duration_ms,
            ),
            Err(e) => logging::log_load_failed(e, duration_ms),
        }

        result
    }

    async fn fetch_and_tally(&self) -> LoadResult<Collections> {
        let (mut events, raw_users, registrations) = futures::try_join!(
            self.fetch_collection::<Event>(Collection::Events),
            self.fetch_collection::<RawUser>(Collection::Users),
            self.fetch_collection::<Registration>(Collection::Registrations),
        )?;

        let users = normalize_users(raw_users);

        let unspecified = registrations
            .iter()
            .filter(|registration| !registration.is_individual() && !registration.is_group())
            .count();
        if unspecified > 0 {
            logging::log_unspecified_registrations(unspecified);
        }

        let orphaned = aggregate::tally_registrations(&mut events, &registrations);

        Ok(Collections {
            events,
            users: UserDirectory::new(users),
            registrations,
            orphaned,
        })
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, collection: Collection) -> LoadResult<Vec<T>> {
        let started = Instant::now();

        let value = self
            .source
            .fetch(collection)
            .await
            .map_err(|source| LoadError::Fetch { collection, source })?;

        let records: Vec<T> = serde_json::from_value(value)
            .map_err(|source| LoadError::Parse { collection, source })?;

        logging::log_fetch(collection, records.len(), started.elapsed().as_millis() as u64);
        Ok(records)
    }
}

/// Users that cannot be identified are dropped from the directory
fn normalize_users(raw_users: Vec<RawUser>) -> Vec<User> {
    let total = raw_users.len();
    let users: Vec<User> = raw_users
        .into_iter()
        .filter_map(|raw| User::try_from(raw).ok())
        .collect();

    if users.len() < total {
        logging::log_skipped_users(total - users.len());
    }
    users
}
