//! Calorie tracker view model — today's meals and intake ring.

use serde::Serialize;

use crate::plan::model::Assessment;

/// A meal entry in the daily log. Entries are illustrative and not
/// persisted beyond the current render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedMeal {
    pub id: String,
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
    pub time: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSummary {
    pub label: String,
    pub grams: u32,
    pub percent: u32,
    /// Daily target in grams, from the assessment.
    pub target: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaloriesView {
    pub meals: Vec<LoggedMeal>,
    pub total_consumed: u32,
    pub total_target: u32,
    pub remaining: u32,
    pub progress_percent: f64,
    pub macros: Vec<MacroSummary>,
}

impl CaloriesView {
    pub fn build(assessment: &Assessment) -> Self {
        // Fixed intake figures; only the macro targets come from the
        // assessment.
        let total_consumed = 1040;
        let total_target = 2600;

        let macros = vec![
            MacroSummary {
                label: "PROTEIN".to_string(),
                grams: 98,
                percent: 64,
                target: assessment.macros.protein.round() as u32,
            },
            MacroSummary {
                label: "CARBS".to_string(),
                grams: 85,
                percent: 27,
                target: assessment.macros.carbs.round() as u32,
            },
            MacroSummary {
                label: "FATS".to_string(),
                grams: 26,
                percent: 32,
                target: assessment.macros.fats.round() as u32,
            },
        ];

        Self {
            meals: logged_meals(),
            total_consumed,
            total_target,
            remaining: total_target - total_consumed,
            progress_percent: ((f64::from(total_consumed) / f64::from(total_target)) * 100.0)
                .min(100.0),
            macros,
        }
    }
}

fn logged_meals() -> Vec<LoggedMeal> {
    vec![
        LoggedMeal {
            id: "1".to_string(),
            name: "Whey Isolate + Berries".to_string(),
            calories: 280,
            protein: 32,
            carbs: 28,
            fats: 4,
            time: "08:42 AM".to_string(),
        },
        LoggedMeal {
            id: "2".to_string(),
            name: "Grilled Chicken + Quinoa".to_string(),
            calories: 540,
            protein: 48,
            carbs: 45,
            fats: 12,
            time: "12:15 PM".to_string(),
        },
        LoggedMeal {
            id: "3".to_string(),
            name: "Greek Yogurt + Almonds".to_string(),
            calories: 220,
            protein: 18,
            carbs: 12,
            fats: 10,
            time: "04:30 PM".to_string(),
        },
    ]
}
