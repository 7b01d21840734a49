use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::warn;
use rand::Rng;
use tokio::time::sleep;

use crate::domain::client::{Client, ClientFormData, ClientStatus};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter, LatencyProfile};
use crate::storage::KeyValueStorage;

/// Storage key holding the full client collection as one JSON array.
pub const CLIENTS_STORAGE_KEY: &str = "mini-crm-clients";

/// Repository persisting the whole client collection under a single key of a
/// [`KeyValueStorage`]. Every mutation reads the collection, rewrites it
/// wholesale and returns the affected record after an artificial delay.
#[derive(Clone)]
pub struct StorageClientRepository {
    storage: Arc<dyn KeyValueStorage>,
    latency: LatencyProfile,
}

impl StorageClientRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            latency: LatencyProfile::default(),
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    /// Reads and parses the persisted collection. A missing key or unparsable
    /// value is treated as an empty collection and never surfaced.
    fn read_clients(&self) -> RepositoryResult<Vec<Client>> {
        let Some(raw) = self.storage.get_item(CLIENTS_STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(clients) => Ok(clients),
            Err(e) => {
                warn!("discarding malformed client collection: {e}");
                Ok(Vec::new())
            }
        }
    }

    fn save_clients(&self, clients: &[Client]) -> RepositoryResult<()> {
        let raw = serde_json::to_string(clients)?;
        self.storage.set_item(CLIENTS_STORAGE_KEY, &raw)?;
        Ok(())
    }
}

/// Current time in milliseconds plus a small random offset. Collisions are
/// possible under rapid creation within the same millisecond; uniqueness is
/// best-effort, not guaranteed.
fn generate_id() -> i64 {
    Utc::now().timestamp_millis() + rand::rng().random_range(0..1000)
}

/// Fixed records written on first use of an empty store.
pub fn seed_clients() -> Vec<Client> {
    let seed = |id, name: &str, email: &str, phone: &str, status, create_at: &str| Client {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        status,
        create_at: create_at.parse().expect("seed timestamp is valid"),
    };
    vec![
        seed(
            1,
            "Иван Петров",
            "ivan@example.com",
            "+7 (999) 123-45-67",
            ClientStatus::Active,
            "2024-01-15T10:00:00Z",
        ),
        seed(
            2,
            "Мария Сидорова",
            "maria@example.com",
            "+7 (999) 234-56-78",
            ClientStatus::New,
            "2024-02-01T14:30:00Z",
        ),
        seed(
            3,
            "Алексей Козлов",
            "alexey@example.com",
            "+7 (999) 345-67-89",
            ClientStatus::Blocked,
            "2024-01-20T09:15:00Z",
        ),
    ]
}

#[async_trait]
impl ClientReader for StorageClientRepository {
    async fn fetch_clients(&self) -> RepositoryResult<Vec<Client>> {
        sleep(self.latency.fetch).await;
        let clients = self.read_clients()?;
        if clients.is_empty() {
            let seeded = seed_clients();
            self.save_clients(&seeded)?;
            return Ok(seeded);
        }
        Ok(clients)
    }
}

#[async_trait]
impl ClientWriter for StorageClientRepository {
    async fn create_client(&self, data: &ClientFormData) -> RepositoryResult<Client> {
        sleep(self.latency.mutate).await;
        // mutations work on the raw collection; seeding happens on fetch only
        let mut clients = self.read_clients()?;
        let client = Client {
            id: generate_id(),
            name: data.name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            status: data.status,
            create_at: Utc::now(),
        };
        clients.push(client.clone());
        self.save_clients(&clients)?;
        Ok(client)
    }

    async fn update_client(&self, id: i64, data: &ClientFormData) -> RepositoryResult<Client> {
        sleep(self.latency.mutate).await;
        let mut clients = self.read_clients()?;
        let Some(slot) = clients.iter_mut().find(|c| c.id == id) else {
            return Err(RepositoryError::NotFound(id));
        };
        let updated = slot.merged_with(data);
        *slot = updated.clone();
        self.save_clients(&clients)?;
        Ok(updated)
    }

    async fn delete_client(&self, id: i64) -> RepositoryResult<()> {
        sleep(self.latency.mutate).await;
        let clients = self.read_clients()?;
        let remaining: Vec<Client> = clients.iter().filter(|c| c.id != id).cloned().collect();
        if remaining.len() == clients.len() {
            return Err(RepositoryError::NotFound(id));
        }
        self.save_clients(&remaining)?;
        Ok(())
    }
}
