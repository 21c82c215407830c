use crate::modules::download::application::ports::outgoing::{
    DownloadRepository, DownloadRepositoryError, NewDownloadRequest,
};
use crate::modules::download::domain::entities::DownloadRequest;
use crate::shared::validation::{char_count, is_valid_email, FieldError};
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestDownloadError {
    #[error("request failed validation")]
    Validation(Vec<FieldError>),

    #[error("record rejected by the store")]
    SchemaRejected(Vec<FieldError>),

    #[error("repository error: {0}")]
    Repository(String),
}

/// An interface for the request-download use case
#[async_trait]
pub trait IRequestDownloadUseCase: Send + Sync {
    async fn execute(
        &self,
        data: NewDownloadRequest,
    ) -> Result<DownloadRequest, RequestDownloadError>;
}

pub struct RequestDownloadUseCase<R>
where
    R: DownloadRepository,
{
    repository: R,
}

impl<R> RequestDownloadUseCase<R>
where
    R: DownloadRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IRequestDownloadUseCase for RequestDownloadUseCase<R>
where
    R: DownloadRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: NewDownloadRequest,
    ) -> Result<DownloadRequest, RequestDownloadError> {
        let errors = validate(&data);
        if !errors.is_empty() {
            return Err(RequestDownloadError::Validation(errors));
        }

        self.repository.insert(data).await.map_err(|e| match e {
            DownloadRepositoryError::SchemaRejected(errors) => {
                RequestDownloadError::SchemaRejected(errors)
            }
            DownloadRepositoryError::DatabaseError(msg) => RequestDownloadError::Repository(msg),
        })
    }
}

/// Field rules for a download request. The email is checked as received,
/// without trimming. The purpose has no upper bound here; the store's
/// varchar(500) column is the only ceiling.
pub fn validate(data: &NewDownloadRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !is_valid_email(&data.email) {
        errors.push(FieldError::new(
            "email",
            "A valid email address is required",
        ));
    }

    if char_count(&data.purpose) < 5 {
        errors.push(FieldError::new(
            "purpose",
            "Purpose must be at least 5 characters",
        ));
    }

    errors
}
