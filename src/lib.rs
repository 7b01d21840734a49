//! mini-crm: a small client-record manager persisted in a local key-value
//! store that stands in for a remote API.
//!
//! Layers, bottom up: [`storage`] is the synchronous string-keyed store,
//! [`repository`] serializes the client collection and filter preferences
//! into it behind async traits with simulated network latency, and
//! [`services`] holds the in-memory state the presentation layer consumes.

pub mod domain;
pub mod forms;
pub mod i18n;
pub mod models;
pub mod repository;
pub mod services;
pub mod storage;
pub mod utils;
