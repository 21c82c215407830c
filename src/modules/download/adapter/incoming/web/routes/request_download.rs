use crate::modules::download::application::ports::outgoing::NewDownloadRequest;
use crate::modules::download::application::use_cases::request_download::RequestDownloadError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for a CV-download request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RequestDownloadRequest {
    /// Requester email address
    #[schema(example = "recruiter@example.com")]
    pub email: String,

    /// Why the CV is requested (at least 5 characters)
    #[schema(example = "Hiring for a backend role")]
    pub purpose: String,
}

/// Record a CV-download request
///
/// Unlike the contact endpoint, this path is not rate limited.
#[utoipa::path(
    post,
    path = "/api/download-cv",
    tag = "download",
    request_body = RequestDownloadRequest,
    responses(
        (status = 201, description = "Request recorded"),
        (status = 400, description = "Validation failed or the store rejected the record"),
        (status = 500, description = "Persistence failed"),
    )
)]
#[post("/api/download-cv")]
pub async fn request_download_handler(
    body: web::Json<RequestDownloadRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = NewDownloadRequest {
        email: body.email.clone(),
        purpose: body.purpose.clone(),
    };

    match data.request_download_use_case.execute(request).await {
        Ok(created) => {
            info!(id = %created.id, "download request recorded");
            ApiResponse::created_message("Download request recorded successfully")
        }

        Err(RequestDownloadError::Validation(errors)) => {
            warn!("download request failed validation");
            ApiResponse::validation_failed("Validation failed", errors)
        }

        Err(RequestDownloadError::SchemaRejected(errors)) => {
            warn!("download request rejected by the store");
            ApiResponse::validation_failed("The request was rejected by the data store", errors)
        }

        Err(RequestDownloadError::Repository(err)) => {
            error!(error = %err, "failed to persist download request");
            ApiResponse::internal_error(data.config.expose_errors.then_some(err))
        }
    }
}
