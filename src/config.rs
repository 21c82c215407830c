//! Process configuration loaded from the environment.

use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub allowed_origin: String,
    pub environment: String,
    /// Include underlying error text in 500 bodies. Never true in production.
    pub expose_errors: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .expect("PORT must be a number");
        let allowed_origin =
            env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let expose_errors = environment != "production";

        Self {
            database_url,
            port,
            allowed_origin,
            environment,
            expose_errors,
        }
    }
}
