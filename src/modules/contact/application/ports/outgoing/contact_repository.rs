// contact_repository.rs
use crate::modules::contact::domain::entities::ContactSubmission;
use crate::shared::validation::FieldError;
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    /// The store itself rejected the record's fields at write time.
    #[error("record rejected by the store")]
    SchemaRejected(Vec<FieldError>),

    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Submission fields before the server assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(
        &self,
        data: NewContactSubmission,
    ) -> Result<ContactSubmission, ContactRepositoryError>;
}
