// download_repository.rs
use crate::modules::download::domain::entities::DownloadRequest;
use crate::shared::validation::FieldError;
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DownloadRepositoryError {
    /// The store itself rejected the record's fields at write time.
    #[error("record rejected by the store")]
    SchemaRejected(Vec<FieldError>),

    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Request fields before the server assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewDownloadRequest {
    pub email: String,
    pub purpose: String,
}

#[async_trait]
pub trait DownloadRepository: Send + Sync {
    async fn insert(
        &self,
        data: NewDownloadRequest,
    ) -> Result<DownloadRequest, DownloadRepositoryError>;
}
