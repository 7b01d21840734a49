//! Domain entities exposed by the record-management layers.

pub mod client;
pub mod filters;
