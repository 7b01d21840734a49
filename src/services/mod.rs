//! Service layer consumed by the presentation code.

pub mod clients;

pub use clients::{ClientStore, filter_clients};
