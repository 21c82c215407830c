pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::contact;
pub use modules::download;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::contact::adapter::outgoing::contact_repo_postgres::ContactRepoPostgres;
use crate::contact::application::use_cases::submit_contact::{
    ISubmitContactUseCase, SubmitContactUseCase,
};
use crate::download::adapter::outgoing::download_repo_postgres::DownloadRepoPostgres;
use crate::download::application::use_cases::request_download::{
    IRequestDownloadUseCase, RequestDownloadUseCase,
};
use crate::shared::api::{custom_json_config, internal_error_handlers};
use crate::shared::db::DatabaseManager;
use crate::shared::rate_limit::RateLimiter;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub contact_limiter: Arc<RateLimiter>,
    pub submit_contact_use_case: Arc<dyn ISubmitContactUseCase + Send + Sync>,
    pub request_download_use_case: Arc<dyn IRequestDownloadUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env();
    info!(
        environment = %config.environment,
        port = config.port,
        "configuration loaded"
    );

    // The server starts regardless of store availability; the supervisor
    // keeps retrying and handlers fail per-request until it connects.
    let db = DatabaseManager::new(&config.database_url);
    Arc::clone(&db).spawn();

    let contact_repo = ContactRepoPostgres::new(Arc::clone(&db));
    let submit_contact_use_case = SubmitContactUseCase::new(contact_repo);

    let download_repo = DownloadRepoPostgres::new(Arc::clone(&db));
    let request_download_use_case = RequestDownloadUseCase::new(download_repo);

    let state = AppState {
        config: config.clone(),
        contact_limiter: Arc::new(RateLimiter::contact_default()),
        submit_contact_use_case: Arc::new(submit_contact_use_case),
        request_download_use_case: Arc::new(request_download_use_case),
    };

    let server_url = format!("0.0.0.0:{}", config.port);
    info!("Server run on: {}", server_url);

    let allowed_origin = config.allowed_origin.clone();
    let expose_errors = config.expose_errors;
    let db_for_server = Arc::clone(&db);

    HttpServer::new(move || {
        // One configured origin, browser-facing methods only
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .wrap(internal_error_handlers(expose_errors))
            .wrap(cors)
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("X-Frame-Options", "DENY"))
                    .add(("Referrer-Policy", "no-referrer")),
            )
            .wrap(middleware::Logger::default())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::index);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    // Download
    cfg.service(crate::download::adapter::incoming::web::routes::request_download_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
