//! Default use-case stubs for handler tests that only care about one path.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::NewContactSubmission;
use crate::modules::contact::application::use_cases::submit_contact::{
    ISubmitContactUseCase, SubmitContactError,
};
use crate::modules::contact::domain::entities::ContactSubmission;
use crate::modules::download::application::ports::outgoing::NewDownloadRequest;
use crate::modules::download::application::use_cases::request_download::{
    IRequestDownloadUseCase, RequestDownloadError,
};
use crate::modules::download::domain::entities::DownloadRequest;

/// Echoes the submission back with a fresh id and timestamp.
pub struct StubSubmitContactUseCase;

#[async_trait]
impl ISubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        data: NewContactSubmission,
    ) -> Result<ContactSubmission, SubmitContactError> {
        Ok(ContactSubmission {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            timestamp: Utc::now(),
        })
    }
}

/// Echoes the request back with a fresh id and timestamp.
pub struct StubRequestDownloadUseCase;

#[async_trait]
impl IRequestDownloadUseCase for StubRequestDownloadUseCase {
    async fn execute(
        &self,
        data: NewDownloadRequest,
    ) -> Result<DownloadRequest, RequestDownloadError> {
        Ok(DownloadRequest {
            id: Uuid::new_v4(),
            email: data.email,
            purpose: data.purpose,
            timestamp: Utc::now(),
        })
    }
}
