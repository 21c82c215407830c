// src/shared/validation.rs
use email_address::EmailAddress;
use serde::Serialize;
use utoipa::ToSchema;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field
    #[schema(example = "message")]
    pub field: String,

    /// Human-readable description of the violation
    #[schema(example = "Message must be between 10 and 5000 characters")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Length in characters, so multi-byte input is not over-rejected.
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}
