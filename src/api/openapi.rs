use utoipa::OpenApi;

use crate::modules::contact::adapter::incoming::web::routes::{
    ContactSubmissionData, SubmitContactRequest,
};
use crate::modules::download::adapter::incoming::web::routes::RequestDownloadRequest;
use crate::shared::api::ApiResponse;
use crate::shared::validation::FieldError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Backend API",
        version = "1.0.0",
        description = "Contact-form and CV-download submissions for a personal portfolio site",
    ),
    paths(
        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,

        // Download
        crate::modules::download::adapter::incoming::web::routes::request_download_handler,

        // Health
        crate::health::health,
    ),
    components(
        schemas(
            // Response wrapper
            ApiResponse<ContactSubmissionData>,
            FieldError,

            // Contact DTOs
            SubmitContactRequest,
            ContactSubmissionData,

            // Download DTOs
            RequestDownloadRequest,
        )
    ),
    tags(
        (name = "contact", description = "Contact-form submissions"),
        (name = "download", description = "CV-download requests"),
        (name = "health", description = "Liveness and readiness"),
    )
)]
pub struct ApiDoc;
