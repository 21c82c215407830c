use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::shared::db::DatabaseManager;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    timestamp: String,
}

/// Process and database status
///
/// Reports the connector's state without touching the store; a down
/// database never makes this endpoint fail.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process status, database connection state and server time"),
    )
)]
#[get("/health")]
pub async fn health(db: web::Data<Arc<DatabaseManager>>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        database: db.status(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("Portfolio backend API is running")
}
