//! REST endpoints for the session: submission, navigation, gated views.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use super::manager::SessionManager;
use super::state::View;

/// Shared state for session routes.
#[derive(Clone)]
pub struct SessionRouteState {
    pub sessions: Arc<SessionManager>,
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "fitai"
    }))
}

/// GET /api/session
async fn get_session(State(state): State<SessionRouteState>) -> impl IntoResponse {
    Json(state.sessions.summary().await)
}

/// POST /api/session/submit
///
/// Freezes the wizard draft and runs the plan pipeline. Returns 409
/// while a run is already in flight. A pipeline failure still answers
/// 200: the summary carries the retry invitation.
async fn submit(State(state): State<SessionRouteState>) -> Response {
    match state.sessions.submit().await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => (
            StatusCode::CONFLICT,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

/// POST /api/session/reset
async fn reset(State(state): State<SessionRouteState>) -> impl IntoResponse {
    state.sessions.reset().await;
    Json(state.sessions.summary().await)
}

#[derive(Debug, Deserialize)]
struct NavigateRequest {
    view: View,
}

/// POST /api/session/navigate
async fn navigate(
    State(state): State<SessionRouteState>,
    Json(request): Json<NavigateRequest>,
) -> impl IntoResponse {
    Json(state.sessions.navigate(request.view).await)
}

/// GET /api/views/{view}
///
/// Returns the view model, or 204 with no body when the view's
/// prerequisite entities are absent.
async fn get_view(
    State(state): State<SessionRouteState>,
    Path(view): Path<View>,
) -> Response {
    match state.sessions.view_content(view).await {
        Some(content) => Json(content).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Build the session REST routes.
pub fn session_routes(state: SessionRouteState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/session", get(get_session))
        .route("/api/session/submit", post(submit))
        .route("/api/session/reset", post(reset))
        .route("/api/session/navigate", post(navigate))
        .route("/api/views/{view}", get(get_view))
        .with_state(state)
}
