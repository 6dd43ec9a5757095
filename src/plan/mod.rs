//! Plan pipeline — assessment, diet, and workout generation.
//!
//! One submitted profile produces one [`model::PlanBundle`]: the assessment
//! request resolves first, then the diet and workout requests fan out
//! concurrently and join before the run is declared successful.

pub mod model;
pub mod orchestrator;
pub mod prompts;

pub use model::{
    Assessment, DailyMealPlan, DailyWorkout, DietPlan, Exercise, MacroTargets, PlanBundle,
    WorkoutPlan,
};
pub use orchestrator::PlanOrchestrator;
