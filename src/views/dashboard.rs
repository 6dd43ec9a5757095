//! Dashboard view model — daily progress snapshot.

use serde::Serialize;

use crate::onboarding::model::{Gender, UserProfile};
use crate::plan::model::Assessment;

/// Illustrative daily intake shown while no meal logging backend exists.
const CONSUMED_CALORIES: u32 = 1420;
const CONSUMED_PROTEIN: u32 = 65;

/// Illustrative week of body-weight samples for the sparkline.
const WEIGHT_TREND: [f64; 7] = [75.2, 75.0, 74.8, 74.9, 74.5, 74.3, 74.2];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub greeting_name: String,
    pub consumed_calories: u32,
    /// Daily calorie goal, taken from the assessment's TDEE.
    pub calorie_target: u32,
    pub calorie_percent: f64,
    pub consumed_protein: u32,
    pub protein_target: u32,
    pub protein_percent: f64,
    pub routine_label: String,
    pub weight_trend: Vec<f64>,
    pub weight_current: f64,
    pub weight_change_label: String,
    /// Polyline points for a 100x40 sparkline viewport.
    pub sparkline_points: String,
}

impl DashboardView {
    pub fn build(profile: &UserProfile, assessment: &Assessment) -> Self {
        let calorie_target = assessment.tdee.round() as u32;
        let protein_target = assessment.macros.protein.round() as u32;

        let greeting_name = match profile.gender {
            Gender::Female => "Sarah",
            _ => "Friend",
        };

        Self {
            greeting_name: greeting_name.to_string(),
            consumed_calories: CONSUMED_CALORIES,
            calorie_target,
            calorie_percent: capped_percent(f64::from(CONSUMED_CALORIES), assessment.tdee),
            consumed_protein: CONSUMED_PROTEIN,
            protein_target,
            protein_percent: capped_percent(
                f64::from(CONSUMED_PROTEIN),
                assessment.macros.protein,
            ),
            routine_label: "Legs & Core • 45m".to_string(),
            weight_trend: WEIGHT_TREND.to_vec(),
            weight_current: WEIGHT_TREND[WEIGHT_TREND.len() - 1],
            weight_change_label: "Down 0.8kg this week".to_string(),
            sparkline_points: sparkline_points(&WEIGHT_TREND),
        }
    }
}

/// Consumed-over-target ratio as a percentage, capped at 100.
fn capped_percent(consumed: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    ((consumed / target) * 100.0).min(100.0)
}

/// Normalize weight samples into polyline points for a 100x40 viewport,
/// using 30 of the 40 vertical units.
fn sparkline_points(samples: &[f64]) -> String {
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };

    samples
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let x = (i as f64 / (samples.len() - 1) as f64) * 100.0;
            let y = 40.0 - ((w - min) / range) * 30.0;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::model::MacroTargets;

    fn assessment() -> Assessment {
        Assessment {
            tdee: 2600.0,
            macros: MacroTargets {
                protein: 180.0,
                carbs: 280.0,
                fats: 70.0,
            },
            ..Default::default()
        }
    }

    #[test]
    fn carries_assessment_targets() {
        let view = DashboardView::build(&UserProfile::default(), &assessment());
        assert_eq!(view.calorie_target, 2600);
        assert_eq!(view.protein_target, 180);
    }

    #[test]
    fn percentages_are_capped() {
        let mut low_target = assessment();
        low_target.tdee = 1000.0;
        let view = DashboardView::build(&UserProfile::default(), &low_target);
        assert!((view.calorie_percent - 100.0).abs() < f64::EPSILON);

        let view = DashboardView::build(&UserProfile::default(), &assessment());
        assert!((view.calorie_percent - (1420.0 / 2600.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn greeting_follows_gender() {
        let mut profile = UserProfile::default();
        profile.gender = Gender::Female;
        assert_eq!(
            DashboardView::build(&profile, &assessment()).greeting_name,
            "Sarah"
        );
        profile.gender = Gender::Male;
        assert_eq!(
            DashboardView::build(&profile, &assessment()).greeting_name,
            "Friend"
        );
    }

    #[test]
    fn sparkline_spans_the_viewport() {
        let view = DashboardView::build(&UserProfile::default(), &assessment());
        let points: Vec<&str> = view.sparkline_points.split(' ').collect();
        assert_eq!(points.len(), 7);
        assert!(points[0].starts_with("0.0,"));
        assert!(points[6].starts_with("100.0,"));
    }

    #[test]
    fn zero_target_does_not_divide_by_zero() {
        let view = DashboardView::build(&UserProfile::default(), &Assessment::default());
        assert_eq!(view.calorie_percent, 0.0);
        assert_eq!(view.protein_percent, 0.0);
    }
}
