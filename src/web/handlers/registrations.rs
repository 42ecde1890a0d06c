//! # Registration Handler
//!
//! HTTP handler for the one mutation this service exposes: accepting a
//! seminar registration submission.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::models::RegistrationRequest;
use crate::services::registration::RegistrationOutcome;
use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

/// Wire result for a submission.
///
/// Post-validation failures are soft: the caller always gets a well-formed
/// body with `success: false` rather than a transport error, and should show
/// a generic retry prompt.
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
}

/// Submit a registration: POST /v1/registrations
///
/// Validates the submission shape first — invalid input is rejected with
/// per-field errors before any side effect. On valid input the registration
/// is persisted and the operator notification dispatched, in that order.
pub async fn submit_registration(
    State(state): State<AppState>,
    Json(request): Json<RegistrationRequest>,
) -> ApiResult<Json<RegistrationResponse>> {
    info!(
        company = %request.company,
        name = %request.name,
        seminars = ?request.selected_seminars,
        "Received registration submission"
    );

    let outcome = state
        .service
        .submit(&request)
        .await
        .map_err(ApiError::validation_failed)?;

    let response = match outcome {
        RegistrationOutcome::Completed { .. } => RegistrationResponse {
            success: true,
            message: "Registration completed".to_string(),
        },
        // The write-failed and notify-failed cases are distinguished in the
        // logs and the outcome type, but collapse to one wire result:
        // success only when both the write and the send completed.
        RegistrationOutcome::SavedButNotNotified { .. } | RegistrationOutcome::Failed => {
            RegistrationResponse {
                success: false,
                message: "Registration failed".to_string(),
            }
        }
    };

    Ok(Json(response))
}
