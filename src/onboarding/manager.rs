//! WizardManager — coordinates wizard state, patches, and auto-advance.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use super::model::{ProfilePatch, UserProfile};
use super::state::{WizardState, WizardStep};

/// Delay between a single-select option landing and the scheduled forward
/// transition.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(200);

/// Snapshot of the wizard for presentation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct WizardSnapshot {
    pub step: WizardStep,
    pub index: usize,
    pub progress: f64,
    pub draft: UserProfile,
}

/// Coordinates the intake wizard: holds the step/draft state and schedules
/// the delayed auto-advance that follows a single-select choice.
///
/// Any wizard action cancels a pending auto-advance, so the timer can
/// never fire on top of a step the user has already left.
pub struct WizardManager {
    state: Arc<RwLock<WizardState>>,
    pending_advance: Mutex<Option<JoinHandle<()>>>,
}

impl WizardManager {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(WizardState::new())),
            pending_advance: Mutex::new(None),
        }
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        let state = self.state.read().await;
        WizardSnapshot {
            step: state.step,
            index: state.step.index(),
            progress: state.step.progress(),
            draft: state.draft.clone(),
        }
    }

    /// The current profile draft, cloned for submission.
    pub async fn profile(&self) -> UserProfile {
        self.state.read().await.draft.clone()
    }

    /// Explicit forward transition. A no-op on the final step.
    pub async fn next(&self) -> WizardStep {
        self.cancel_pending().await;
        self.state.write().await.advance()
    }

    /// Explicit backward transition. A no-op on the welcome step.
    pub async fn back(&self) -> WizardStep {
        self.cancel_pending().await;
        self.state.write().await.back()
    }

    /// Apply a partial profile update.
    ///
    /// When the patch lands the single-select choice of the current step,
    /// a forward transition is scheduled after [`AUTO_ADVANCE_DELAY`].
    pub async fn apply(&self, patch: &ProfilePatch) -> WizardStep {
        self.cancel_pending().await;

        let step = {
            let mut state = self.state.write().await;
            state.apply(patch);
            state.step
        };

        if step.auto_advances() && selects_step_choice(step, patch) {
            self.schedule_advance().await;
        }

        step
    }

    /// Reset to the welcome step with a fresh draft.
    pub async fn reset(&self) {
        self.cancel_pending().await;
        self.state.write().await.reset();
    }

    async fn schedule_advance(&self) {
        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(AUTO_ADVANCE_DELAY).await;
            let step = state.write().await.advance();
            tracing::debug!(step = %step, "Wizard auto-advanced");
        });
        *self.pending_advance.lock().await = Some(handle);
    }

    async fn cancel_pending(&self) {
        if let Some(handle) = self.pending_advance.lock().await.take() {
            handle.abort();
        }
    }
}

impl Default for WizardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for WizardManager {
    fn drop(&mut self) {
        // Abort a pending transition so no timer outlives the wizard.
        if let Ok(mut pending) = self.pending_advance.try_lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

/// Whether the patch carries the single-select choice belonging to `step`.
fn selects_step_choice(step: WizardStep, patch: &ProfilePatch) -> bool {
    match step {
        WizardStep::Goal => patch.goal.is_some(),
        WizardStep::Activity => patch.activity_level.is_some(),
        WizardStep::Pattern => patch.meal_pattern.is_some(),
        _ => false,
    }
}
