use std::sync::Arc;

use log::warn;
use serde_json::Value;

use crate::domain::filters::{SavedFilters, StatusFilter};
use crate::repository::FilterStore;
use crate::storage::KeyValueStorage;

/// Storage key holding the saved list filters as one JSON object.
pub const FILTERS_STORAGE_KEY: &str = "mini-crm-filters";

/// Filter-preference persistence over a [`KeyValueStorage`].
///
/// Loading is parse-then-validate: whatever is stored (missing key, invalid
/// JSON, partial object, wrong-typed fields) comes back as a well-formed
/// [`SavedFilters`], never a partial value. Saving swallows write failures,
/// a lost preference is not worth surfacing.
#[derive(Clone)]
pub struct StorageFilterRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl StorageFilterRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

/// String coercion applied to the stored `search` field, accepting scalars
/// written by older or foreign producers.
fn coerce_search(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

impl FilterStore for StorageFilterRepository {
    fn load_filters(&self) -> SavedFilters {
        let raw = match self.storage.get_item(FILTERS_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SavedFilters::default(),
            Err(e) => {
                warn!("failed to read saved filters: {e}");
                return SavedFilters::default();
            }
        };
        let Ok(parsed) = serde_json::from_str::<Value>(&raw) else {
            return SavedFilters::default();
        };
        let search = parsed.get("search").map(coerce_search).unwrap_or_default();
        let status = parsed
            .get("status")
            .and_then(Value::as_str)
            .map(StatusFilter::from_stored)
            .unwrap_or_default();
        SavedFilters { search, status }
    }

    fn save_filters(&self, filters: &SavedFilters) {
        let raw = match serde_json::to_string(filters) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to serialize filters: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set_item(FILTERS_STORAGE_KEY, &raw) {
            warn!("failed to save filters: {e}");
        }
    }
}
