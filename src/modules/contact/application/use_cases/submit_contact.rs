use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, NewContactSubmission,
};
use crate::modules::contact::domain::entities::ContactSubmission;
use crate::shared::validation::{char_count, is_valid_email, FieldError};
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("submission failed validation")]
    Validation(Vec<FieldError>),

    #[error("record rejected by the store")]
    SchemaRejected(Vec<FieldError>),

    #[error("repository error: {0}")]
    Repository(String),
}

/// An interface for the submit-contact use case
#[async_trait]
pub trait ISubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        data: NewContactSubmission,
    ) -> Result<ContactSubmission, SubmitContactError>;
}

pub struct SubmitContactUseCase<R>
where
    R: ContactRepository,
{
    repository: R,
}

impl<R> SubmitContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ISubmitContactUseCase for SubmitContactUseCase<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: NewContactSubmission,
    ) -> Result<ContactSubmission, SubmitContactError> {
        // Stored values are the trimmed ones
        let data = normalize(data);

        let errors = validate(&data);
        if !errors.is_empty() {
            return Err(SubmitContactError::Validation(errors));
        }

        self.repository.insert(data).await.map_err(|e| match e {
            ContactRepositoryError::SchemaRejected(errors) => {
                SubmitContactError::SchemaRejected(errors)
            }
            ContactRepositoryError::DatabaseError(msg) => SubmitContactError::Repository(msg),
        })
    }
}

fn normalize(data: NewContactSubmission) -> NewContactSubmission {
    NewContactSubmission {
        name: data.name.trim().to_string(),
        email: data.email.trim().to_string(),
        subject: data.subject.trim().to_string(),
        message: data.message.trim().to_string(),
    }
}

/// Field rules for a contact submission. Collects every violation instead of
/// stopping at the first, so one response lists them all.
pub fn validate(data: &NewContactSubmission) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let name_len = char_count(&data.name);
    if !(2..=100).contains(&name_len) {
        errors.push(FieldError::new(
            "name",
            "Name must be between 2 and 100 characters",
        ));
    }

    if !is_valid_email(&data.email) {
        errors.push(FieldError::new(
            "email",
            "A valid email address is required",
        ));
    }

    let subject_len = char_count(&data.subject);
    if !(2..=200).contains(&subject_len) {
        errors.push(FieldError::new(
            "subject",
            "Subject must be between 2 and 200 characters",
        ));
    }

    let message_len = char_count(&data.message);
    if !(10..=5000).contains(&message_len) {
        errors.push(FieldError::new(
            "message",
            "Message must be between 10 and 5000 characters",
        ));
    }

    errors
}
