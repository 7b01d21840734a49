//! Configuration model loaded from external sources.

use std::time::Duration;

use config::{Config, ConfigError};
use serde::Deserialize;

use crate::repository::LatencyProfile;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared by the CLI front end.
pub struct AppConfig {
    /// Path of the JSON file backing the key-value store.
    pub data_file: String,
    /// Simulated latency of a collection fetch, in milliseconds.
    pub fetch_delay_ms: u64,
    /// Simulated latency of a create/update/delete, in milliseconds.
    pub mutate_delay_ms: u64,
    /// Byte quota of the backing store; unbounded when absent.
    #[serde(default)]
    pub storage_quota_bytes: Option<usize>,
}

impl AppConfig {
    /// Loads `mini-crm.yaml` (optional) with `MINI_CRM_*` environment
    /// overrides on top of built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("data_file", "mini-crm.json")?
            .set_default("fetch_delay_ms", 500_i64)?
            .set_default("mutate_delay_ms", 300_i64)?
            .add_source(config::File::with_name("mini-crm").required(false))
            .add_source(config::Environment::with_prefix("MINI_CRM"))
            .build()?
            .try_deserialize()
    }

    pub fn latency(&self) -> LatencyProfile {
        LatencyProfile {
            fetch: Duration::from_millis(self.fetch_delay_ms),
            mutate: Duration::from_millis(self.mutate_delay_ms),
        }
    }
}
