pub mod manager;

pub use manager::{ConnectionState, DatabaseManager};

/// Whether a store error means the record itself was rejected at the schema
/// level, as opposed to the store being unreachable or otherwise failing.
/// Postgres reports these as data/constraint violations.
pub fn is_schema_violation(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("value too long")
        || message.contains("violates check constraint")
        || message.contains("violates not-null constraint")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_length_and_constraint_violations() {
        assert!(is_schema_violation(
            "value too long for type character varying(500)"
        ));
        assert!(is_schema_violation(
            "new row for relation \"downloads\" violates check constraint \"purpose_len\""
        ));
        assert!(is_schema_violation(
            "null value in column \"email\" violates not-null constraint"
        ));
    }

    #[test]
    fn other_errors_are_not_schema_violations() {
        assert!(!is_schema_violation("connection refused"));
        assert!(!is_schema_violation("timed out waiting for connection"));
    }
}
