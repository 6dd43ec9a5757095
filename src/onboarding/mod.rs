//! Intake wizard — nine-step profile collection.
//!
//! The wizard accumulates a [`model::UserProfile`] across a strictly linear
//! step sequence. Single-select steps auto-advance shortly after a choice
//! lands; slider/text steps advance on an explicit continue. Submission
//! hands the frozen profile to the plan orchestrator.

pub mod manager;
pub mod model;
pub mod routes;
pub mod state;

pub use manager::{AUTO_ADVANCE_DELAY, WizardManager, WizardSnapshot};
pub use model::{
    ActivityLevel, CuisineStyle, DietType, ExperienceLevel, Gender, Goal, MealPattern,
    ProfilePatch, UserProfile, WorkoutPreference,
};
pub use routes::{WizardRouteState, wizard_routes};
pub use state::{WizardState, WizardStep};
