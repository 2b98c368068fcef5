//! Webhook route for the voice platform's skill requests
//!
//! The platform posts one request envelope per turn: launch, intent, or
//! session-ended. Requests from unknown applications are rejected before
//! any dispatch happens.

use axum::{Json, extract::State};
use speechlet::{RequestEnvelope, ResponseEnvelope};
use tracing::warn;

use crate::{AppState, error::ApiError};

/// Handle one skill request envelope
///
/// POST /skill
pub async fn handle_skill_request(
    State(state): State<AppState>,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    verify_application_id(&state, &envelope)?;

    let response = state.speechlet.handle(envelope).await;
    Ok(Json(response))
}

fn verify_application_id(state: &AppState, envelope: &RequestEnvelope) -> Result<(), ApiError> {
    let presented = envelope
        .session
        .as_ref()
        .and_then(|session| session.application.as_ref())
        .map(|application| application.application_id.as_str())
        .unwrap_or_default();

    if state.skill_config.accepts(presented) {
        Ok(())
    } else {
        warn!("Rejecting request from unknown application id '{}'", presented);
        Err(ApiError::Forbidden("Unknown application id".to_string()))
    }
}
