#![allow(dead_code)]

use std::sync::Arc;

use mini_crm::domain::client::{ClientFormData, ClientStatus};
use mini_crm::repository::{LatencyProfile, StorageClientRepository};
use mini_crm::storage::{KeyValueStorage, MemoryStorage, StorageError, StorageResult};

/// Repository over a fresh in-memory store with latency disabled, returned
/// together with the store so tests can inspect persisted values.
pub fn memory_repo() -> (StorageClientRepository, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let repo = StorageClientRepository::new(storage.clone()).with_latency(LatencyProfile::none());
    (repo, storage)
}

pub fn form(name: &str) -> ClientFormData {
    ClientFormData {
        name: name.to_string(),
        email: "new@test.com".to_string(),
        phone: "+7 999".to_string(),
        status: ClientStatus::New,
    }
}

/// Store whose writes always fail, for driving error paths end to end.
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::QuotaExceeded {
            needed: 1,
            capacity: 0,
        })
    }

    fn remove_item(&self, _key: &str) -> StorageResult<()> {
        Ok(())
    }
}
