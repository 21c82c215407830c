// src/shared/api/response.rs
use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::validation::FieldError;

/// Standard JSON envelope for every response the API produces.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct ApiResponse<T: Serialize> {
    /// True on the 2xx paths, false otherwise
    #[schema(example = true)]
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Itemized field-level messages (validation and schema rejections)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,

    /// Underlying error text, exposed outside production only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn created(message: &str, data: T) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            message: message.to_string(),
            data: Some(data),
            errors: None,
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn created_message(message: &str) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse::<()> {
            success: true,
            message: message.to_string(),
            data: None,
            errors: None,
            error: None,
        })
    }

    pub fn validation_failed(message: &str, errors: Vec<FieldError>) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::<()> {
            success: false,
            message: message.to_string(),
            data: None,
            errors: Some(errors),
            error: None,
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::<()> {
            success: false,
            message: message.to_string(),
            data: None,
            errors: None,
            error: None,
        })
    }

    pub fn too_many_requests(message: &str) -> HttpResponse {
        HttpResponse::TooManyRequests().json(ApiResponse::<()> {
            success: false,
            message: message.to_string(),
            data: None,
            errors: None,
            error: None,
        })
    }

    /// Generic 500 body. `detail` carries the underlying error text and must
    /// only be passed when the runtime environment allows exposing it.
    pub fn internal_error(detail: Option<String>) -> HttpResponse {
        HttpResponse::InternalServerError().json(ApiResponse::<()> {
            success: false,
            message: "Something went wrong. Please try again later.".to_string(),
            data: None,
            errors: None,
            error: detail,
        })
    }
}
