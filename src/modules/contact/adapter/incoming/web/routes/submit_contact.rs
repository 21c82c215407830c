use crate::modules::contact::application::ports::outgoing::NewContactSubmission;
use crate::modules::contact::application::use_cases::submit_contact::SubmitContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for a contact-form submission
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    /// Sender name (2-100 characters)
    #[schema(example = "Jane Doe")]
    pub name: String,

    /// Sender email address
    #[schema(example = "jane@example.com")]
    pub email: String,

    /// Subject line (2-200 characters)
    #[schema(example = "Freelance inquiry")]
    pub subject: String,

    /// Message body (10-5000 characters)
    #[schema(example = "I would like to talk about a project.")]
    pub message: String,
}

/// Fields echoed back after a submission is stored
#[derive(Serialize, ToSchema)]
pub struct ContactSubmissionData {
    /// Server-assigned record id
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    /// Server-assigned submission time
    pub timestamp: DateTime<Utc>,
}

/// Submit a contact-form message
///
/// Rate limited to 10 submissions per client address per 15 minutes.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Submission stored", body = ApiResponse<ContactSubmissionData>),
        (status = 400, description = "Validation failed or the store rejected the record"),
        (status = 429, description = "Rate limit exceeded for this client address"),
        (status = 500, description = "Persistence failed"),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: HttpRequest,
    body: web::Json<SubmitContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Rate limit before any validation work
    let client = client_addr(&req);
    if !data.contact_limiter.check(&client) {
        warn!(client = %client, "contact rate limit exceeded");
        return ApiResponse::too_many_requests(
            "Too many contact requests from this IP, please try again later",
        );
    }

    let submission = NewContactSubmission {
        name: body.name.clone(),
        email: body.email.clone(),
        subject: body.subject.clone(),
        message: body.message.clone(),
    };

    match data.submit_contact_use_case.execute(submission).await {
        Ok(created) => {
            info!(id = %created.id, "contact submission stored");
            ApiResponse::created(
                "Message sent successfully",
                ContactSubmissionData {
                    id: created.id,
                    name: created.name,
                    email: created.email,
                    subject: created.subject,
                    timestamp: created.timestamp,
                },
            )
        }

        Err(SubmitContactError::Validation(errors)) => {
            warn!(client = %client, "contact submission failed validation");
            ApiResponse::validation_failed("Validation failed", errors)
        }

        Err(SubmitContactError::SchemaRejected(errors)) => {
            warn!(client = %client, "contact submission rejected by the store");
            ApiResponse::validation_failed("The submission was rejected by the data store", errors)
        }

        Err(SubmitContactError::Repository(err)) => {
            error!(error = %err, "failed to persist contact submission");
            ApiResponse::internal_error(data.config.expose_errors.then_some(err))
        }
    }
}

fn client_addr(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
