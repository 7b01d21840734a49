//! Mock repository implementations for isolating the service layer in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::client::{Client, ClientFormData};
use crate::domain::filters::SavedFilters;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter, FilterStore};

mock! {
    pub Repository {}

    #[async_trait]
    impl ClientReader for Repository {
        async fn fetch_clients(&self) -> RepositoryResult<Vec<Client>>;
    }

    #[async_trait]
    impl ClientWriter for Repository {
        async fn create_client(&self, data: &ClientFormData) -> RepositoryResult<Client>;
        async fn update_client(&self, id: i64, data: &ClientFormData) -> RepositoryResult<Client>;
        async fn delete_client(&self, id: i64) -> RepositoryResult<()>;
    }
}

mock! {
    pub Filters {}

    impl FilterStore for Filters {
        fn load_filters(&self) -> SavedFilters;
        fn save_filters(&self, filters: &SavedFilters);
    }
}
