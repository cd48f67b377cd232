use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::contact::models::{ContactSubmission, DeliveryOutcome, PersistedSubmission};
use crate::contact::validation::validate_submission;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RecoveryResponse {
    pub record: Option<PersistedSubmission>,
}

#[derive(Serialize)]
pub struct ConfigStatusResponse {
    pub configured: bool,
}

/// POST /api/v1/contact
///
/// Validates field content, then hands off to the manager. A delivery
/// failure is a 200 with `success: false`; only bad input is an HTTP error.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(data): Json<ContactSubmission>,
) -> Result<Json<DeliveryOutcome>, AppError> {
    let errors = validate_submission(&data);
    if !errors.is_empty() {
        let summary = errors
            .iter()
            .map(|e| e.reason.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(AppError::Validation(summary));
    }

    let outcome = state.manager.submit(&data).await;
    Ok(Json(outcome))
}

/// GET /api/v1/contact/recovery
///
/// Fresh recovery record for form repopulation, or null. Stale and
/// malformed records read as null.
pub async fn handle_get_recovery(State(state): State<AppState>) -> Json<RecoveryResponse> {
    Json(RecoveryResponse {
        record: state.manager.get_persisted().await,
    })
}

/// DELETE /api/v1/contact/recovery
pub async fn handle_clear_recovery(State(state): State<AppState>) -> StatusCode {
    state.manager.clear().await;
    StatusCode::NO_CONTENT
}

/// GET /api/v1/contact/status
///
/// Feeds the non-blocking "contact form not configured" banner.
pub async fn handle_config_status(State(state): State<AppState>) -> Json<ConfigStatusResponse> {
    Json(ConfigStatusResponse {
        configured: state.manager.is_configured(),
    })
}
