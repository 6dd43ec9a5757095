//! Report view model — the wellness blueprint snapshot.

use serde::Serialize;

use crate::coach::image::strip_bullet_prefix;
use crate::plan::model::Assessment;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroBar {
    pub label: String,
    pub grams: u32,
    /// Bar width percentage for display.
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub bmi: f64,
    pub bmi_classification: String,
    pub tdee: u32,
    pub primary_focus: String,
    pub issues: Vec<String>,
    pub macros: Vec<MacroBar>,
    /// Recommendations split into numbered display lines.
    pub next_steps: Vec<String>,
}

impl ReportView {
    pub fn build(assessment: &Assessment) -> Self {
        let macros = [
            ("Protein", assessment.macros.protein),
            ("Carbs", assessment.macros.carbs),
            ("Fats", assessment.macros.fats),
        ]
        .into_iter()
        .map(|(label, grams)| MacroBar {
            label: label.to_string(),
            grams: grams.round() as u32,
            percent: bar_percent(grams),
        })
        .collect();

        Self {
            bmi: assessment.bmi,
            bmi_classification: assessment.bmi_classification.clone(),
            tdee: assessment.tdee.round() as u32,
            primary_focus: assessment.primary_focus.clone(),
            issues: assessment.issues.clone(),
            macros,
            next_steps: next_steps(&assessment.recommendations),
        }
    }
}

/// Bar width for a macro amount; approaches 100 as the amount grows.
fn bar_percent(grams: f64) -> f64 {
    if grams <= 0.0 {
        return 0.0;
    }
    ((grams / (grams + 50.0)) * 100.0).min(100.0)
}

/// Split recommendation text into clean, non-empty display lines.
fn next_steps(recommendations: &str) -> Vec<String> {
    recommendations
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| strip_bullet_prefix(line).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::model::MacroTargets;

    fn assessment() -> Assessment {
        Assessment {
            bmi: 22.5,
            bmi_classification: "Healthy range".to_string(),
            tdee: 2600.0,
            issues: vec!["Hydration".to_string(), "Sleep consistency".to_string()],
            primary_focus: "Lean recomposition".to_string(),
            recommendations: "• Start with three sessions\n\n- Drink water early\nKeep it fun"
                .to_string(),
            macros: MacroTargets {
                protein: 150.0,
                carbs: 200.0,
                fats: 70.0,
            },
        }
    }

    #[test]
    fn next_steps_strip_bullets_and_blanks() {
        let view = ReportView::build(&assessment());
        assert_eq!(
            view.next_steps,
            vec![
                "Start with three sessions",
                "Drink water early",
                "Keep it fun"
            ]
        );
    }

    #[test]
    fn macro_bars_follow_the_display_formula() {
        let view = ReportView::build(&assessment());
        assert_eq!(view.macros[0].grams, 150);
        assert!((view.macros[0].percent - 75.0).abs() < 1e-9);
        assert!((view.macros[2].percent - (70.0 / 120.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn carries_assessment_summary() {
        let view = ReportView::build(&assessment());
        assert_eq!(view.tdee, 2600);
        assert_eq!(view.bmi_classification, "Healthy range");
        assert_eq!(view.issues.len(), 2);
    }

    #[test]
    fn empty_assessment_yields_empty_report_fields() {
        let view = ReportView::build(&Assessment::default());
        assert!(view.next_steps.is_empty());
        assert_eq!(view.macros[0].percent, 0.0);
    }
}
