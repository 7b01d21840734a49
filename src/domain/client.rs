use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a client record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    New,
    Active,
    Blocked,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 3] = [
        ClientStatus::New,
        ClientStatus::Active,
        ClientStatus::Blocked,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClientStatus::New => "new",
            ClientStatus::Active => "active",
            ClientStatus::Blocked => "blocked",
        }
    }
}

impl Display for ClientStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error produced when parsing a status string fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown client status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for ClientStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(ClientStatus::New),
            "active" => Ok(ClientStatus::Active),
            "blocked" => Ok(ClientStatus::Blocked),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A contact record as persisted under the clients storage key.
///
/// `id` and `create_at` are assigned by the repository at creation time and
/// never change afterwards. The serialized field name `createAt` matches the
/// persisted format.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: ClientStatus,
    #[serde(rename = "createAt")]
    pub create_at: DateTime<Utc>,
}

impl Client {
    /// Merges form data over this record, preserving `id` and `create_at`.
    #[must_use]
    pub fn merged_with(&self, data: &ClientFormData) -> Client {
        Client {
            id: self.id,
            name: data.name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            status: data.status,
            create_at: self.create_at,
        }
    }
}

/// The mutable subset of [`Client`] accepted by create and update calls.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: ClientStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in ClientStatus::ALL {
            assert_eq!(status.as_str().parse::<ClientStatus>(), Ok(status));
        }
        assert!("archived".parse::<ClientStatus>().is_err());
    }

    #[test]
    fn client_serializes_with_original_field_names() {
        let client = Client {
            id: 1,
            name: "Иван Петров".to_string(),
            email: "ivan@example.com".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            status: ClientStatus::Active,
            create_at: "2024-01-15T10:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["createAt"], "2024-01-15T10:00:00Z");
    }

    #[test]
    fn merge_preserves_id_and_creation_time() {
        let client = Client {
            id: 42,
            name: "Old".to_string(),
            email: "old@example.com".to_string(),
            phone: "1".to_string(),
            status: ClientStatus::New,
            create_at: "2024-02-01T14:30:00Z".parse().unwrap(),
        };
        let updated = client.merged_with(&ClientFormData {
            name: "New".to_string(),
            email: "new@example.com".to_string(),
            phone: "2".to_string(),
            status: ClientStatus::Blocked,
        });
        assert_eq!(updated.id, 42);
        assert_eq!(updated.create_at, client.create_at);
        assert_eq!(updated.name, "New");
        assert_eq!(updated.status, ClientStatus::Blocked);
    }
}
