use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{ClientFormData, ClientStatus};

/// Boundary validation for client input. The repository itself accepts any
/// form data; format checks happen here before anything is persisted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClientForm {
    /// Display name.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Contact email address.
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    /// Lifecycle status.
    pub status: ClientStatus,
}

impl From<&ClientForm> for ClientFormData {
    fn from(form: &ClientForm) -> Self {
        ClientFormData {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_lowercase(),
            phone: form.phone.trim().to_string(),
            status: form.status,
        }
    }
}
