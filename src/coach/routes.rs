//! REST endpoints for the coach conversation and image analysis.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::warn;

use super::image::{IMAGE_ERROR_MESSAGE, feedback_bullets};
use crate::session::manager::SessionManager;
use crate::session::state::View;

/// Shared state for coach routes.
#[derive(Clone)]
pub struct CoachRouteState {
    pub sessions: Arc<SessionManager>,
}

/// GET /api/coach
///
/// The coach view model: conversation so far plus quick prompts. 204
/// until an assessment exists.
async fn get_coach(State(state): State<CoachRouteState>) -> Response {
    match state.sessions.view_content(View::Coach).await {
        Some(content) => Json(content).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct MessageRequest {
    text: String,
}

/// POST /api/coach/message
///
/// Appends one user message and returns the coach's reply. 204 while
/// the coach is gated or when the input is blank.
async fn send_message(
    State(state): State<CoachRouteState>,
    Json(request): Json<MessageRequest>,
) -> Response {
    match state.sessions.chat_send(&request.text).await {
        Some(reply) => Json(serde_json::json!({"reply": reply})).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageRequest {
    data: String,
    mime_type: String,
}

/// POST /api/coach/image
///
/// Analyzes a base64-encoded health image. Every failure collapses to
/// the one generic reprocessing request.
async fn analyze_image(
    State(state): State<CoachRouteState>,
    Json(request): Json<ImageRequest>,
) -> Response {
    match state
        .sessions
        .analyze_image(&request.data, &request.mime_type)
        .await
    {
        Ok(feedback) => Json(serde_json::json!({
            "feedback": feedback,
            "bullets": feedback_bullets(&feedback),
        }))
        .into_response(),
        Err(e) => {
            warn!(error = %e, "Image analysis failed");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({"error": IMAGE_ERROR_MESSAGE})),
            )
                .into_response()
        }
    }
}

/// Build the coach REST routes.
pub fn coach_routes(state: CoachRouteState) -> Router {
    Router::new()
        .route("/api/coach", get(get_coach))
        .route("/api/coach/message", post(send_message))
        .route("/api/coach/image", post(analyze_image))
        .with_state(state)
}
