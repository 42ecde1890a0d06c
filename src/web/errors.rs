//! # Web API Error Types
//!
//! Error types specific to the web API and their HTTP response conversions.
//! Leverages thiserror for structured error handling and Axum's IntoResponse
//! for HTTP conversion.
//!
//! Only validation failures surface here as hard errors; storage and
//! delivery problems never reach this type (they become soft-failure
//! response bodies in the registration handler).

use crate::validation::FieldError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Web API specific errors with HTTP status code mappings.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Validation failed")]
    ValidationFailed { errors: Vec<FieldError> },

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Create a BadRequest error with a custom message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a ValidationFailed error from per-field errors.
    pub fn validation_failed(errors: Vec<FieldError>) -> Self {
        Self::ValidationFailed { errors }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "BAD_REQUEST",
                    "message": message,
                })),
            )
                .into_response(),

            ApiError::ValidationFailed { errors } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "VALIDATION_FAILED",
                    "message": "入力内容に誤りがあります",
                    "field_errors": errors,
                })),
            )
                .into_response(),

            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "INTERNAL_ERROR",
                    "message": "Internal server error",
                })),
            )
                .into_response(),
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
