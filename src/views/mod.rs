//! Read-only view models rendered from session state.
//!
//! Each view is a pure function of already-fetched state plus small
//! amounts of fixed illustrative data used for visual completeness. No
//! view performs business logic beyond derived percentages and
//! formatting.

pub mod calories;
pub mod dashboard;
pub mod progress;
pub mod report;

pub use calories::{CaloriesView, LoggedMeal};
pub use dashboard::DashboardView;
pub use progress::{Period, ProgressView, StrengthMetric};
pub use report::ReportView;

/// Rotating status lines shown while the plan pipeline runs.
pub const PROCESSING_MESSAGES: [&str; 5] = [
    "Creating your personal routine...",
    "Looking at your nutrition goals...",
    "Setting up your wellness plan...",
    "Finding the best routine for you...",
    "Almost ready...",
];

/// How often the processing view rotates to the next status line.
pub const PROCESSING_ROTATE_MS: u64 = 2500;
