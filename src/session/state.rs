//! Session state — the single owning scope for all fetched entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::onboarding::model::UserProfile;
use crate::plan::model::{Assessment, DietPlan, PlanBundle, WorkoutPlan};

/// Generic retry invitation shown when the plan pipeline fails.
pub const PLAN_ERROR_MESSAGE: &str =
    "We had a small issue creating your plan. Let's try once more.";

/// The navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Setup,
    Dashboard,
    Training,
    Nutrition,
    Progress,
    Calories,
    Coach,
}

impl Default for View {
    fn default() -> Self {
        Self::Setup
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Setup => "setup",
            Self::Dashboard => "dashboard",
            Self::Training => "training",
            Self::Nutrition => "nutrition",
            Self::Progress => "progress",
            Self::Calories => "calories",
            Self::Coach => "coach",
        };
        write!(f, "{s}")
    }
}

/// All session-scoped state. Nothing here is persisted; a reset or
/// restart discards everything.
#[derive(Debug)]
pub struct SessionState {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub profile: Option<UserProfile>,
    pub assessment: Option<Assessment>,
    pub diet_plan: Option<DietPlan>,
    pub workout_plan: Option<WorkoutPlan>,
    pub active_view: View,
    /// True while a plan pipeline is in flight. Gates resubmission.
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            created_at: Utc::now(),
            profile: None,
            assessment: None,
            diet_plan: None,
            workout_plan: None,
            active_view: View::default(),
            loading: false,
            error: None,
        }
    }

    /// Whether the entities a view depends on are present.
    ///
    /// The router renders nothing for a view whose prerequisites are
    /// absent; it never errors.
    pub fn prerequisites_met(&self, view: View) -> bool {
        match view {
            View::Setup => true,
            View::Dashboard | View::Progress | View::Coach => {
                self.profile.is_some() && self.assessment.is_some()
            }
            View::Training => self.workout_plan.is_some(),
            View::Nutrition => self.diet_plan.is_some(),
            View::Calories => self.assessment.is_some(),
        }
    }

    /// Store a successful pipeline result and land on the dashboard.
    ///
    /// All three derived entities are set together; they are only valid in
    /// combination with the profile that produced them.
    pub fn store_bundle(&mut self, bundle: PlanBundle) {
        self.assessment = Some(bundle.assessment);
        self.diet_plan = Some(bundle.diet_plan);
        self.workout_plan = Some(bundle.workout_plan);
        self.error = None;
        self.active_view = View::Dashboard;
    }

    /// Discard everything and return to setup.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::model::{DietPlan, WorkoutPlan};

    fn bundle() -> PlanBundle {
        PlanBundle {
            assessment: Assessment::default(),
            diet_plan: DietPlan::default(),
            workout_plan: WorkoutPlan::default(),
        }
    }

    #[test]
    fn fresh_session_only_renders_setup() {
        let state = SessionState::new();
        assert!(state.prerequisites_met(View::Setup));
        for view in [
            View::Dashboard,
            View::Training,
            View::Nutrition,
            View::Progress,
            View::Calories,
            View::Coach,
        ] {
            assert!(!state.prerequisites_met(view), "{view} should be gated");
        }
    }

    #[test]
    fn store_bundle_unlocks_dependent_views() {
        let mut state = SessionState::new();
        state.profile = Some(UserProfile::default());
        state.store_bundle(bundle());

        assert_eq!(state.active_view, View::Dashboard);
        for view in [
            View::Dashboard,
            View::Training,
            View::Nutrition,
            View::Progress,
            View::Calories,
            View::Coach,
        ] {
            assert!(state.prerequisites_met(view), "{view} should render");
        }
    }

    #[test]
    fn training_needs_the_workout_plan_specifically() {
        let mut state = SessionState::new();
        state.profile = Some(UserProfile::default());
        state.assessment = Some(Assessment::default());
        assert!(!state.prerequisites_met(View::Training));
        assert!(!state.prerequisites_met(View::Nutrition));
        assert!(state.prerequisites_met(View::Calories));

        state.workout_plan = Some(WorkoutPlan::default());
        assert!(state.prerequisites_met(View::Training));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = SessionState::new();
        state.profile = Some(UserProfile::default());
        state.store_bundle(bundle());
        state.error = Some("old".to_string());

        let old_id = state.session_id;
        state.reset();

        assert!(state.profile.is_none());
        assert!(state.assessment.is_none());
        assert!(state.error.is_none());
        assert_eq!(state.active_view, View::Setup);
        assert_ne!(state.session_id, old_id);
    }

    #[test]
    fn view_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&View::Dashboard).unwrap(), "\"dashboard\"");
        let parsed: View = serde_json::from_str("\"training\"").unwrap();
        assert_eq!(parsed, View::Training);
    }
}
