use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// An update or delete referenced an id that is not in the collection.
    #[error("client with id {0} not found")]
    NotFound(i64),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
