use std::time::Duration;

use async_trait::async_trait;

use crate::domain::client::{Client, ClientFormData};
use crate::domain::filters::SavedFilters;
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
pub mod filters;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use client::StorageClientRepository;
pub use filters::StorageFilterRepository;

/// Artificial delays standing in for network round trips. The in-flight
/// window is observable, so the delays are configurable rather than removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub fetch: Duration,
    pub mutate: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(500),
            mutate: Duration::from_millis(300),
        }
    }
}

impl LatencyProfile {
    /// No delays at all; used by tests.
    pub fn none() -> Self {
        Self {
            fetch: Duration::ZERO,
            mutate: Duration::ZERO,
        }
    }
}

#[async_trait]
pub trait ClientReader: Send + Sync {
    /// Reads the full collection, seeding default records when it is empty.
    async fn fetch_clients(&self) -> RepositoryResult<Vec<Client>>;
}

#[async_trait]
pub trait ClientWriter: Send + Sync {
    async fn create_client(&self, data: &ClientFormData) -> RepositoryResult<Client>;
    async fn update_client(&self, id: i64, data: &ClientFormData) -> RepositoryResult<Client>;
    async fn delete_client(&self, id: i64) -> RepositoryResult<()>;
}

/// Persistence for the list view's filter preferences. Both operations are
/// total: loading falls back to defaults, saving swallows write failures.
pub trait FilterStore: Send + Sync {
    fn load_filters(&self) -> SavedFilters;
    fn save_filters(&self, filters: &SavedFilters);
}
