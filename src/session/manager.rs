//! Session manager — drives submission, navigation, and the view router.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::coach::chat::CoachChat;
use crate::coach::image::ImageAnalyzer;
use crate::error::{Error, SessionError};
use crate::llm::LlmProvider;
use crate::onboarding::manager::WizardManager;
use crate::plan::orchestrator::PlanOrchestrator;
use crate::session::state::{PLAN_ERROR_MESSAGE, SessionState, View};
use crate::views::{
    CaloriesView, DashboardView, PROCESSING_MESSAGES, PROCESSING_ROTATE_MS, ProgressView,
    ReportView,
};

/// Serializable snapshot of the session for clients.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub active_view: View,
    pub loading: bool,
    pub error: Option<String>,
    pub has_profile: bool,
    pub has_assessment: bool,
    pub has_diet_plan: bool,
    pub has_workout_plan: bool,
}

/// Owns the session scope and coordinates its collaborators.
///
/// One pipeline can be in flight at a time; the `loading` flag gates
/// resubmission. In-flight requests are never cancelled — a run settles
/// as success or as the single generic error.
pub struct SessionManager {
    state: RwLock<SessionState>,
    wizard: Arc<WizardManager>,
    orchestrator: PlanOrchestrator,
    chat: Mutex<CoachChat>,
    analyzer: ImageAnalyzer,
}

impl SessionManager {
    /// `plan_llm` serves the structured pipeline and image analysis;
    /// `chat_llm` serves the coach conversation.
    pub fn new(plan_llm: Arc<dyn LlmProvider>, chat_llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            state: RwLock::new(SessionState::new()),
            wizard: Arc::new(WizardManager::new()),
            orchestrator: PlanOrchestrator::new(Arc::clone(&plan_llm)),
            chat: Mutex::new(CoachChat::new(chat_llm)),
            analyzer: ImageAnalyzer::new(plan_llm),
        }
    }

    /// The intake wizard feeding this session.
    pub fn wizard(&self) -> Arc<WizardManager> {
        Arc::clone(&self.wizard)
    }

    pub async fn summary(&self) -> SessionSummary {
        summarize(&*self.state.read().await)
    }

    /// Freeze the wizard's draft and run the plan pipeline on it.
    ///
    /// Rejected while a run is already in flight. A pipeline failure is
    /// not an error here: it settles into the session as the generic
    /// retry invitation, and the user may resubmit from the wizard.
    pub async fn submit(&self) -> Result<SessionSummary, SessionError> {
        let profile = {
            let mut state = self.state.write().await;
            if state.loading {
                return Err(SessionError::PipelineInFlight);
            }
            state.loading = true;
            state.error = None;
            let profile = self.wizard.profile().await;
            state.profile = Some(profile.clone());
            profile
        };

        let outcome = self.orchestrator.generate(&profile).await;

        let mut state = self.state.write().await;
        match outcome {
            Ok(bundle) => {
                state.store_bundle(bundle);
                info!(view = %state.active_view, "Plan stored, session ready");
            }
            Err(e) => {
                warn!(error = %e, "Plan pipeline failed");
                state.error = Some(PLAN_ERROR_MESSAGE.to_string());
            }
        }
        state.loading = false;
        Ok(summarize(&state))
    }

    /// Switch the active view. No history stack; any view may be selected,
    /// but gated views only yield content once their prerequisites exist.
    pub async fn navigate(&self, view: View) -> SessionSummary {
        let mut state = self.state.write().await;
        state.active_view = view;
        summarize(&state)
    }

    /// Discard the whole session: state, wizard draft, and conversation.
    pub async fn reset(&self) {
        self.state.write().await.reset();
        self.wizard.reset().await;
        self.chat.lock().await.reset();
        info!("Session reset");
    }

    /// The view model for `view`, or `None` when its prerequisites are
    /// absent. Callers render nothing in that case — never an error.
    pub async fn view_content(&self, view: View) -> Option<serde_json::Value> {
        let state = self.state.read().await;
        if !state.prerequisites_met(view) {
            return None;
        }

        let content = match view {
            View::Setup => {
                let wizard = self.wizard.snapshot().await;
                serde_json::json!({
                    "wizard": wizard,
                    "loading": state.loading,
                    "error": state.error,
                    "processingMessages": PROCESSING_MESSAGES,
                    "processingRotateMs": PROCESSING_ROTATE_MS,
                })
            }
            View::Dashboard => {
                let profile = state.profile.as_ref()?;
                let assessment = state.assessment.as_ref()?;
                serde_json::to_value(DashboardView::build(profile, assessment)).ok()?
            }
            View::Training => serde_json::to_value(state.workout_plan.as_ref()?).ok()?,
            View::Nutrition => serde_json::to_value(state.diet_plan.as_ref()?).ok()?,
            View::Progress => {
                let assessment = state.assessment.as_ref()?;
                serde_json::json!({
                    "progress": ProgressView::build(),
                    "report": ReportView::build(assessment),
                })
            }
            View::Calories => {
                serde_json::to_value(CaloriesView::build(state.assessment.as_ref()?)).ok()?
            }
            View::Coach => {
                let chat = self.chat.lock().await;
                serde_json::json!({
                    "messages": chat.history(),
                    "quickPrompts": crate::coach::chat::QUICK_PROMPTS,
                })
            }
        };
        Some(content)
    }

    /// Send one coach message. `None` when the coach view is still gated
    /// or the input was blank.
    pub async fn chat_send(&self, text: &str) -> Option<String> {
        if !self.state.read().await.prerequisites_met(View::Coach) {
            return None;
        }
        self.chat.lock().await.send(text).await
    }

    /// Analyze a base64-encoded health image.
    pub async fn analyze_image(&self, data: &str, mime_type: &str) -> Result<String, Error> {
        self.analyzer.analyze(data, mime_type).await
    }
}

fn summarize(state: &SessionState) -> SessionSummary {
    SessionSummary {
        active_view: state.active_view,
        loading: state.loading,
        error: state.error.clone(),
        has_profile: state.profile.is_some(),
        has_assessment: state.assessment.is_some(),
        has_diet_plan: state.diet_plan.is_some(),
        has_workout_plan: state.workout_plan.is_some(),
    }
}
