//! Structured error handling for the registration service.
//!
//! Only validation errors are allowed to reach the caller as hard failures;
//! database and delivery errors are caught at the endpoint boundary and
//! converted into soft-failure responses (see [`crate::services::registration`]).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeminarError {
    /// Durable write failed (connectivity, constraint violation).
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Email provider rejected the message or was unreachable.
    #[error("Delivery error: {0}")]
    DeliveryError(String),

    /// Input failed shape validation before any side effect.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Malformed or incomplete configuration at startup.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<sqlx::Error> for SeminarError {
    fn from(err: sqlx::Error) -> Self {
        SeminarError::DatabaseError(err.to_string())
    }
}

impl From<reqwest::Error> for SeminarError {
    fn from(err: reqwest::Error) -> Self {
        SeminarError::DeliveryError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SeminarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_prefix() {
        let err = SeminarError::DatabaseError("connection refused".to_string());
        assert_eq!(err.to_string(), "Database error: connection refused");

        let err = SeminarError::DeliveryError("provider returned 401".to_string());
        assert_eq!(err.to_string(), "Delivery error: provider returned 401");
    }
}
