use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::error;

use crate::storage::{KeyValueStorage, StorageError, StorageResult, check_quota};

/// Default quota, mirroring the usual browser local-storage allowance.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// File-backed store: all cells live in one JSON object file which is
/// rewritten wholesale on every mutation. Survives process restarts.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    cells: Mutex<HashMap<String, String>>,
    capacity: Option<usize>,
}

impl FileStorage {
    /// Opens (or creates) the store at `path` with the default quota.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        Self::open_with_quota(path, Some(DEFAULT_QUOTA_BYTES))
    }

    /// Opens the store with an explicit quota, or unbounded when `None`.
    pub fn open_with_quota(
        path: impl Into<PathBuf>,
        capacity: Option<usize>,
    ) -> StorageResult<Self> {
        let path = path.into();
        let cells = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| StorageError::Malformed(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            cells: Mutex::new(cells),
            capacity,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, cells: &HashMap<String, String>) -> StorageResult<()> {
        let raw = serde_json::to_string(cells)
            .map_err(|e| StorageError::Malformed(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw).and_then(|()| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                error!("failed to persist storage file {}: {e}", self.path.display());
                StorageError::from(e)
            })
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let cells = self.cells.lock().expect("storage mutex poisoned");
        Ok(cells.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut cells = self.cells.lock().expect("storage mutex poisoned");
        check_quota(&cells, key, value, self.capacity)?;
        // the cache commits only once the write has landed on disk
        let mut candidate = cells.clone();
        candidate.insert(key.to_string(), value.to_string());
        self.persist(&candidate)?;
        *cells = candidate;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let mut cells = self.cells.lock().expect("storage mutex poisoned");
        if !cells.contains_key(key) {
            return Ok(());
        }
        let mut candidate = cells.clone();
        candidate.remove(key);
        self.persist(&candidate)?;
        *cells = candidate;
        Ok(())
    }
}
