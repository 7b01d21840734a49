//! Interface language and the generic failure strings the state manager
//! falls back to when a failure carries no message of its own.

use std::str::FromStr;

use thiserror::Error;

use crate::storage::KeyValueStorage;

/// Storage key holding the interface language as a plain string.
pub const LOCALE_STORAGE_KEY: &str = "locale";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    /// Reads the persisted locale, defaulting to Russian when the key is
    /// missing or holds an unknown value.
    pub fn from_storage(storage: &dyn KeyValueStorage) -> Self {
        storage
            .get_item(LOCALE_STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }
}

/// Error produced when parsing a locale string fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown locale: {0}")]
pub struct ParseLocaleError(pub String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

/// Localized generic error strings, one per state-manager operation.
#[derive(Debug)]
pub struct Messages {
    pub load_clients_failed: &'static str,
    pub create_client_failed: &'static str,
    pub update_client_failed: &'static str,
    pub delete_client_failed: &'static str,
}

static RU: Messages = Messages {
    load_clients_failed: "Не удалось загрузить клиентов",
    create_client_failed: "Не удалось создать клиента",
    update_client_failed: "Не удалось обновить клиента",
    delete_client_failed: "Не удалось удалить клиента",
};

static EN: Messages = Messages {
    load_clients_failed: "Failed to load clients",
    create_client_failed: "Failed to create client",
    update_client_failed: "Failed to update client",
    delete_client_failed: "Failed to delete client",
};
