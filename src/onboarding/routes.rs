//! REST endpoints for the intake wizard.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use super::manager::WizardManager;
use super::model::ProfilePatch;

/// Shared state for wizard routes.
#[derive(Clone)]
pub struct WizardRouteState {
    pub manager: Arc<WizardManager>,
}

/// GET /api/wizard
///
/// Returns the current step, its position and progress, and the draft.
async fn get_wizard(State(state): State<WizardRouteState>) -> impl IntoResponse {
    Json(state.manager.snapshot().await)
}

/// POST /api/wizard/patch
///
/// Applies a partial profile update. Landing the current step's
/// single-select choice schedules the delayed auto-advance.
async fn patch_wizard(
    State(state): State<WizardRouteState>,
    Json(patch): Json<ProfilePatch>,
) -> impl IntoResponse {
    state.manager.apply(&patch).await;
    Json(state.manager.snapshot().await)
}

/// POST /api/wizard/next
async fn next_step(State(state): State<WizardRouteState>) -> impl IntoResponse {
    state.manager.next().await;
    Json(state.manager.snapshot().await)
}

/// POST /api/wizard/back
async fn back_step(State(state): State<WizardRouteState>) -> impl IntoResponse {
    state.manager.back().await;
    Json(state.manager.snapshot().await)
}

/// Build the wizard REST routes.
pub fn wizard_routes(state: WizardRouteState) -> Router {
    Router::new()
        .route("/api/wizard", get(get_wizard))
        .route("/api/wizard/patch", post(patch_wizard))
        .route("/api/wizard/next", post(next_step))
        .route("/api/wizard/back", post(back_step))
        .with_state(state)
}
