//! Persistent key-value storage standing in for browser local storage.
//!
//! Keys and values are plain strings; every write replaces the whole value
//! under its key. Stores are capacity-bounded: a write that would push the
//! total payload past the configured quota fails with
//! [`StorageError::QuotaExceeded`] and leaves the store untouched.

use thiserror::Error;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, {capacity} available")]
    QuotaExceeded { needed: usize, capacity: usize },

    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed storage file: {0}")]
    Malformed(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous string-keyed store. Reads and writes never suspend; callers
/// layer any latency on top.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key` if present. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

/// Total payload size used for quota accounting: key and value bytes of
/// every cell, with `key` mapped to `incoming` in place of its current value.
fn projected_size(
    cells: &std::collections::HashMap<String, String>,
    key: &str,
    incoming: &str,
) -> usize {
    cells
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| k.len() + v.len())
        .sum::<usize>()
        + key.len()
        + incoming.len()
}

fn check_quota(
    cells: &std::collections::HashMap<String, String>,
    key: &str,
    incoming: &str,
    capacity: Option<usize>,
) -> StorageResult<()> {
    if let Some(capacity) = capacity {
        let needed = projected_size(cells, key, incoming);
        if needed > capacity {
            return Err(StorageError::QuotaExceeded { needed, capacity });
        }
    }
    Ok(())
}
