use std::sync::Arc;

use actix_web::web;

use crate::config::AppConfig;
use crate::modules::contact::application::use_cases::submit_contact::ISubmitContactUseCase;
use crate::modules::download::application::use_cases::request_download::IRequestDownloadUseCase;
use crate::shared::rate_limit::RateLimiter;
use crate::tests::support::stubs::{StubRequestDownloadUseCase, StubSubmitContactUseCase};
use crate::AppState;

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://localhost/portfolio_test".to_string(),
        port: 5000,
        allowed_origin: "http://localhost:3000".to_string(),
        environment: "test".to_string(),
        expose_errors: true,
    }
}

pub fn production_config() -> AppConfig {
    AppConfig {
        environment: "production".to_string(),
        expose_errors: false,
        ..test_config()
    }
}

pub struct TestAppStateBuilder {
    config: AppConfig,
    limiter: Arc<RateLimiter>,
    submit_contact: Arc<dyn ISubmitContactUseCase + Send + Sync>,
    request_download: Arc<dyn IRequestDownloadUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            config: test_config(),
            limiter: Arc::new(RateLimiter::contact_default()),
            submit_contact: Arc::new(StubSubmitContactUseCase),
            request_download: Arc::new(StubRequestDownloadUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = Arc::new(limiter);
        self
    }

    pub fn with_submit_contact(
        mut self,
        use_case: impl ISubmitContactUseCase + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(use_case);
        self
    }

    pub fn with_request_download(
        mut self,
        use_case: impl IRequestDownloadUseCase + 'static,
    ) -> Self {
        self.request_download = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            config: self.config,
            contact_limiter: self.limiter,
            submit_contact_use_case: self.submit_contact,
            request_download_use_case: self.request_download,
        })
    }
}
