use std::fmt::{Display, Formatter};

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::domain::client::{Client, ClientStatus};

/// Status half of the saved list filter. `Any` persists as an empty string,
/// matching the stored format where "" means "no status filter".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Only(ClientStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ClientStatus) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::Any => "",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Lenient parse used when reading persisted preferences: anything that
    /// is not a known status string collapses to `Any`.
    pub fn from_stored(value: &str) -> Self {
        value
            .parse::<ClientStatus>()
            .map_or(StatusFilter::Any, StatusFilter::Only)
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ClientStatus> for StatusFilter {
    fn from(status: ClientStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(StatusFilter::from_stored(&value))
    }
}

/// Search/status preferences the list view persists between sessions.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct SavedFilters {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
}

impl SavedFilters {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Whether a record passes both the substring search (over name, email
    /// and phone, case-insensitive) and the status filter.
    pub fn matches(&self, client: &Client) -> bool {
        if !self.status.matches(client.status) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&client.name, &client.email, &client.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
