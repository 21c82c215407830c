// src/shared/api/error_handlers.rs
use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    http::StatusCode,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    Result,
};
use tracing::error;

use crate::shared::api::ApiResponse;

/// Catch-all stage for errors no handler classified itself: logs the
/// underlying error and rewrites the response into the JSON envelope.
pub fn internal_error_handlers<B: MessageBody + 'static>(expose_errors: bool) -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, move |res| {
        render_internal_error(res, expose_errors)
    })
}

fn render_internal_error<B>(
    res: ServiceResponse<B>,
    expose_errors: bool,
) -> Result<ErrorHandlerResponse<B>> {
    let detail = res.response().error().map(|err| err.to_string());
    match &detail {
        Some(err) => error!(error = %err, "unhandled error reached the catch-all stage"),
        None => error!("unhandled error reached the catch-all stage"),
    }

    let (req, _) = res.into_parts();
    let response = ApiResponse::internal_error(if expose_errors { detail } else { None });

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}
