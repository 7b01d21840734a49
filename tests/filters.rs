use std::sync::Arc;

use mini_crm::domain::client::ClientStatus;
use mini_crm::domain::filters::{SavedFilters, StatusFilter};
use mini_crm::repository::filters::FILTERS_STORAGE_KEY;
use mini_crm::repository::{FilterStore, StorageFilterRepository};
use mini_crm::storage::{KeyValueStorage, MemoryStorage};

mod common;

fn filter_repo() -> (StorageFilterRepository, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (StorageFilterRepository::new(storage.clone()), storage)
}

#[test]
fn missing_key_yields_defaults() {
    let (repo, _storage) = filter_repo();
    assert_eq!(repo.load_filters(), SavedFilters::default());
}

#[test]
fn invalid_json_yields_defaults() {
    let (repo, storage) = filter_repo();
    storage.set_item(FILTERS_STORAGE_KEY, "invalid json").unwrap();
    assert_eq!(repo.load_filters(), SavedFilters::default());
}

#[test]
fn partial_object_is_filled_with_defaults() {
    let (repo, storage) = filter_repo();
    storage
        .set_item(FILTERS_STORAGE_KEY, r#"{"search":"q"}"#)
        .unwrap();

    let filters = repo.load_filters();
    assert_eq!(filters.search, "q");
    assert_eq!(filters.status, StatusFilter::Any);
}

#[test]
fn wrong_typed_fields_are_coerced_or_defaulted() {
    let (repo, storage) = filter_repo();
    storage
        .set_item(FILTERS_STORAGE_KEY, r#"{"search":42,"status":17}"#)
        .unwrap();

    let filters = repo.load_filters();
    assert_eq!(filters.search, "42");
    assert_eq!(filters.status, StatusFilter::Any);
}

#[test]
fn unknown_status_string_means_any() {
    let (repo, storage) = filter_repo();
    storage
        .set_item(FILTERS_STORAGE_KEY, r#"{"search":"","status":"archived"}"#)
        .unwrap();
    assert_eq!(repo.load_filters().status, StatusFilter::Any);
}

#[test]
fn save_then_load_round_trips() {
    let (repo, _storage) = filter_repo();
    let filters = SavedFilters::new("test", ClientStatus::Active.into());

    repo.save_filters(&filters);
    assert_eq!(repo.load_filters(), filters);
}

#[test]
fn save_overwrites_previous_filters() {
    let (repo, _storage) = filter_repo();

    repo.save_filters(&SavedFilters::new("old", StatusFilter::Any));
    repo.save_filters(&SavedFilters::new("new", ClientStatus::Blocked.into()));

    assert_eq!(
        repo.load_filters(),
        SavedFilters::new("new", ClientStatus::Blocked.into())
    );
}

#[test]
fn write_failure_is_swallowed() {
    let repo = StorageFilterRepository::new(Arc::new(common::FailingStorage));
    // does not panic or surface anything
    repo.save_filters(&SavedFilters::new("q", StatusFilter::Any));
    assert_eq!(repo.load_filters(), SavedFilters::default());
}

#[test]
fn persisted_format_matches_the_original_shape() {
    let (repo, storage) = filter_repo();
    repo.save_filters(&SavedFilters::new("query", ClientStatus::New.into()));

    let raw = storage.get_item(FILTERS_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"search":"query","status":"new"}"#);
}
