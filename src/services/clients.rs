use crate::domain::client::{Client, ClientFormData};
use crate::domain::filters::SavedFilters;
use crate::i18n::{Locale, Messages};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, ClientWriter};

/// Applies saved list filters to a record slice, preserving order.
pub fn filter_clients(clients: &[Client], filters: &SavedFilters) -> Vec<Client> {
    clients
        .iter()
        .filter(|c| filters.matches(c))
        .cloned()
        .collect()
}

/// In-memory cache of the client collection plus the CRUD operations the
/// presentation layer drives.
///
/// Each operation sets `loading` and clears `error` up front, calls into the
/// repository, reconciles `records` on success, and on failure stores a
/// user-facing message (the failure's own, or a localized generic fallback
/// when it carries none) before re-raising. `loading` drops on every path.
/// Record lists are replaced wholesale rather than mutated in place, so a
/// caller holding a clone of a previous list never observes changes.
pub struct ClientStore<R> {
    repo: R,
    messages: &'static Messages,
    records: Vec<Client>,
    loading: bool,
    error: Option<String>,
}

impl<R> ClientStore<R> {
    pub fn new(repo: R, locale: Locale) -> Self {
        Self {
            repo,
            messages: locale.messages(),
            records: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn records(&self) -> &[Client] {
        &self.records
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }

    /// Pure read of the in-memory cache; no repository call.
    pub fn find_by_id(&self, id: i64) -> Option<&Client> {
        self.records.iter().find(|c| c.id == id)
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, e: &RepositoryError, fallback: &'static str) {
        let message = e.to_string();
        self.error = Some(if message.is_empty() {
            fallback.to_string()
        } else {
            message
        });
        self.loading = false;
    }
}

impl<R> ClientStore<R>
where
    R: ClientReader + ClientWriter,
{
    /// Replaces the cached records with the repository's collection.
    pub async fn fetch_all(&mut self) -> RepositoryResult<()> {
        self.begin();
        match self.repo.fetch_clients().await {
            Ok(clients) => {
                self.records = clients;
                self.loading = false;
                Ok(())
            }
            Err(e) => {
                self.fail(&e, self.messages.load_clients_failed);
                self.records = Vec::new();
                Err(e)
            }
        }
    }

    /// Creates a record and appends it to the cache.
    pub async fn create(&mut self, data: &ClientFormData) -> RepositoryResult<Client> {
        self.begin();
        match self.repo.create_client(data).await {
            Ok(client) => {
                let mut next = self.records.clone();
                next.push(client.clone());
                self.records = next;
                self.loading = false;
                Ok(client)
            }
            Err(e) => {
                self.fail(&e, self.messages.create_client_failed);
                Err(e)
            }
        }
    }

    /// Updates a record and replaces it at its position in the cache. When
    /// the id is absent from the cache the returned record is not reflected
    /// there; a later `fetch_all` picks it up.
    pub async fn update(&mut self, id: i64, data: &ClientFormData) -> RepositoryResult<Client> {
        self.begin();
        match self.repo.update_client(id, data).await {
            Ok(client) => {
                if let Some(pos) = self.records.iter().position(|c| c.id == id) {
                    let mut next = self.records.clone();
                    next[pos] = client.clone();
                    self.records = next;
                }
                self.loading = false;
                Ok(client)
            }
            Err(e) => {
                self.fail(&e, self.messages.update_client_failed);
                Err(e)
            }
        }
    }

    /// Deletes a record and drops it from the cache.
    pub async fn delete(&mut self, id: i64) -> RepositoryResult<()> {
        self.begin();
        match self.repo.delete_client(id).await {
            Ok(()) => {
                self.records = self.records.iter().filter(|c| c.id != id).cloned().collect();
                self.loading = false;
                Ok(())
            }
            Err(e) => {
                self.fail(&e, self.messages.delete_client_failed);
                Err(e)
            }
        }
    }
}
