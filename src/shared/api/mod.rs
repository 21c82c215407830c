pub mod error_handlers;
pub mod json_config;
pub mod response;

pub use error_handlers::internal_error_handlers;
pub use json_config::custom_json_config;
pub use response::ApiResponse;
