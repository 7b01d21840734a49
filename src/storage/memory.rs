use std::collections::HashMap;
use std::sync::Mutex;

use crate::storage::{KeyValueStorage, StorageResult, check_quota};

/// In-process store used by tests and as a scratch backend. Unbounded unless
/// constructed with an explicit byte quota.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    cells: Mutex<HashMap<String, String>>,
    capacity: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes once key+value bytes exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            cells: Mutex::new(HashMap::new()),
            capacity: Some(bytes),
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let cells = self.cells.lock().expect("storage mutex poisoned");
        Ok(cells.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut cells = self.cells.lock().expect("storage mutex poisoned");
        check_quota(&cells, key, value, self.capacity)?;
        cells.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let mut cells = self.cells.lock().expect("storage mutex poisoned");
        cells.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;

    #[test]
    fn set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.get_item("k").unwrap().is_none());
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
        storage.remove_item("k").unwrap();
        assert!(storage.get_item("k").unwrap().is_none());
        // removing again is fine
        storage.remove_item("k").unwrap();
    }

    #[test]
    fn quota_rejects_oversized_write_without_applying_it() {
        let storage = MemoryStorage::with_quota(8);
        storage.set_item("k", "12345").unwrap();
        let err = storage.set_item("k2", "123456789").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        // prior cell untouched, failed cell absent
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("12345"));
        assert!(storage.get_item("k2").unwrap().is_none());
    }

    #[test]
    fn quota_counts_replacement_not_accumulation() {
        let storage = MemoryStorage::with_quota(6);
        storage.set_item("k", "12345").unwrap();
        // replacing the same key with an equal-sized value stays in quota
        storage.set_item("k", "54321").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("54321"));
    }
}
