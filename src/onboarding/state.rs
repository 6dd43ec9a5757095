//! Wizard state machine — tracks which intake step the user is on.

use serde::{Deserialize, Serialize};

use super::model::{ProfilePatch, UserProfile};

/// The nine steps of the intake wizard.
///
/// Progression is strictly linear: welcome → basics → goal → activity →
/// workout → nutrition → pattern → habits → final. There is no skipping
/// and no validation gating; every field carries a usable default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Welcome,
    Basics,
    Goal,
    Activity,
    Workout,
    Nutrition,
    Pattern,
    Habits,
    Final,
}

impl WizardStep {
    /// All steps in wizard order.
    pub const SEQUENCE: [WizardStep; 9] = [
        Self::Welcome,
        Self::Basics,
        Self::Goal,
        Self::Activity,
        Self::Workout,
        Self::Nutrition,
        Self::Pattern,
        Self::Habits,
        Self::Final,
    ];

    /// Zero-based position in the sequence.
    pub fn index(&self) -> usize {
        Self::SEQUENCE
            .iter()
            .position(|step| step == self)
            .unwrap_or(0)
    }

    /// The next step, if not already at the last.
    pub fn next(&self) -> Option<WizardStep> {
        Self::SEQUENCE.get(self.index() + 1).copied()
    }

    /// The previous step, if not already at the first.
    pub fn back(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::SEQUENCE[i])
    }

    pub fn is_first(&self) -> bool {
        self.index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.index() == Self::SEQUENCE.len() - 1
    }

    /// Whether this step advances on its own shortly after a single-select
    /// option lands. Multi-field steps require an explicit continue.
    pub fn auto_advances(&self) -> bool {
        matches!(self, Self::Goal | Self::Activity | Self::Pattern)
    }

    /// Completion percentage shown by the wizard's progress bar.
    pub fn progress(&self) -> f64 {
        ((self.index() + 1) as f64 / Self::SEQUENCE.len() as f64) * 100.0
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Welcome
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Welcome => "welcome",
            Self::Basics => "basics",
            Self::Goal => "goal",
            Self::Activity => "activity",
            Self::Workout => "workout",
            Self::Nutrition => "nutrition",
            Self::Pattern => "pattern",
            Self::Habits => "habits",
            Self::Final => "final",
        };
        write!(f, "{s}")
    }
}

/// The wizard's mutable state: current step plus the profile draft.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    pub step: WizardStep,
    pub draft: UserProfile,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move forward one step. A no-op on the last step.
    pub fn advance(&mut self) -> WizardStep {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    /// Move back one step. A no-op on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.back() {
            self.step = previous;
        }
        self.step
    }

    /// Apply a partial update to the draft.
    pub fn apply(&mut self, patch: &ProfilePatch) {
        patch.apply(&mut self.draft);
    }

    /// Reset to the welcome step with a fresh draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::model::Goal;

    #[test]
    fn sequence_walks_all_nine_steps() {
        let mut current = WizardStep::Welcome;
        for expected in &WizardStep::SEQUENCE[1..] {
            let next = current.next().unwrap();
            assert_eq!(next, *expected);
            current = next;
        }
        assert!(current.next().is_none());
        assert!(current.is_last());
    }

    #[test]
    fn index_stays_within_bounds() {
        let mut state = WizardState::new();

        // Back on the first step is a no-op.
        assert_eq!(state.back(), WizardStep::Welcome);
        assert_eq!(state.step.index(), 0);

        // Walk to the end, then keep advancing.
        for _ in 0..20 {
            state.advance();
        }
        assert_eq!(state.step, WizardStep::Final);
        assert_eq!(state.step.index(), 8);

        // Continue on the last step is a no-op.
        assert_eq!(state.advance(), WizardStep::Final);
        assert_eq!(state.step.index(), 8);
    }

    #[test]
    fn back_retreats_one_step() {
        let mut state = WizardState::new();
        state.advance();
        state.advance();
        assert_eq!(state.step, WizardStep::Goal);
        assert_eq!(state.back(), WizardStep::Basics);
    }

    #[test]
    fn single_select_steps_auto_advance() {
        assert!(WizardStep::Goal.auto_advances());
        assert!(WizardStep::Activity.auto_advances());
        assert!(WizardStep::Pattern.auto_advances());

        assert!(!WizardStep::Welcome.auto_advances());
        assert!(!WizardStep::Basics.auto_advances());
        assert!(!WizardStep::Workout.auto_advances());
        assert!(!WizardStep::Nutrition.auto_advances());
        assert!(!WizardStep::Habits.auto_advances());
        assert!(!WizardStep::Final.auto_advances());
    }

    #[test]
    fn progress_spans_first_to_last() {
        let first = WizardStep::Welcome.progress();
        let last = WizardStep::Final.progress();
        assert!((first - 100.0 / 9.0).abs() < 1e-9);
        assert!((last - 100.0).abs() < 1e-9);
    }

    #[test]
    fn apply_updates_draft() {
        let mut state = WizardState::new();
        state.apply(&ProfilePatch {
            age: Some(45),
            goal: Some(Goal::Endurance),
            ..Default::default()
        });
        assert_eq!(state.draft.age, 45);
        assert_eq!(state.draft.goal, Goal::Endurance);
    }

    #[test]
    fn reset_returns_to_welcome_with_defaults() {
        let mut state = WizardState::new();
        state.advance();
        state.apply(&ProfilePatch {
            age: Some(60),
            ..Default::default()
        });
        state.reset();
        assert_eq!(state.step, WizardStep::Welcome);
        assert_eq!(state.draft.age, 28);
    }

    #[test]
    fn display_matches_serde() {
        for step in WizardStep::SEQUENCE {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{step}\""));
        }
    }
}
