//! Assessment and plan records returned by the collaborator.
//!
//! These mirror the structured response shapes requested from the model.
//! Every struct tolerates an empty `{}` body (all fields defaulted) because
//! the structured endpoints are parsed optimistically.

use serde::{Deserialize, Serialize};

/// Daily macro targets in grams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MacroTargets {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// The derived wellness summary produced from a submitted profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assessment {
    pub bmi: f64,
    pub bmi_classification: String,
    /// Estimated daily calorie needs.
    pub tdee: f64,
    /// Main focus areas identified from the profile.
    pub issues: Vec<String>,
    pub primary_focus: String,
    pub recommendations: String,
    pub macros: MacroTargets,
}

/// One day of the weekly meal plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyMealPlan {
    pub day: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: Vec<String>,
    pub total_calories: f64,
}

/// Weekly meal schedule keyed to one assessment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietPlan {
    pub weekly_plan: Vec<DailyMealPlan>,
    pub general_advice: String,
}

/// A single exercise prescription.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest: String,
}

/// One day of the weekly training split.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyWorkout {
    pub day: String,
    pub focus: String,
    pub warmup: String,
    pub exercises: Vec<Exercise>,
    pub cooldown: String,
}

/// Weekly training schedule keyed to one assessment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutPlan {
    pub weekly_split: Vec<DailyWorkout>,
    pub progressive_overload_guidance: String,
    pub safety_tips: String,
}

/// Everything one successful pipeline run produces.
#[derive(Debug, Clone, Serialize)]
pub struct PlanBundle {
    pub assessment: Assessment,
    pub diet_plan: DietPlan,
    pub workout_plan: WorkoutPlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_parses_wire_shape() {
        let assessment: Assessment = serde_json::from_str(
            r#"{
                "bmi": 22.5,
                "bmiClassification": "Healthy range",
                "tdee": 2600,
                "issues": ["Sleep consistency", "Hydration"],
                "primaryFocus": "Lean recomposition",
                "recommendations": "Start slow.",
                "macros": {"protein": 180, "carbs": 280, "fats": 70}
            }"#,
        )
        .unwrap();

        assert!((assessment.bmi - 22.5).abs() < f64::EPSILON);
        assert_eq!(assessment.bmi_classification, "Healthy range");
        assert!((assessment.tdee - 2600.0).abs() < f64::EPSILON);
        assert_eq!(assessment.issues.len(), 2);
        assert!((assessment.macros.protein - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_object_defaults_every_field() {
        let assessment: Assessment = serde_json::from_str("{}").unwrap();
        assert_eq!(assessment.bmi, 0.0);
        assert!(assessment.issues.is_empty());
        assert_eq!(assessment.macros, MacroTargets::default());

        let diet: DietPlan = serde_json::from_str("{}").unwrap();
        assert!(diet.weekly_plan.is_empty());

        let workout: WorkoutPlan = serde_json::from_str("{}").unwrap();
        assert!(workout.weekly_split.is_empty());
    }

    #[test]
    fn diet_plan_parses_wire_shape() {
        let diet: DietPlan = serde_json::from_str(
            r#"{
                "weeklyPlan": [{
                    "day": "Monday",
                    "breakfast": "Oats",
                    "lunch": "Dahl and roti",
                    "dinner": "Paneer bowl",
                    "snacks": ["Fruit", "Nuts"],
                    "totalCalories": 2450
                }],
                "generalAdvice": "Cook ahead."
            }"#,
        )
        .unwrap();

        assert_eq!(diet.weekly_plan.len(), 1);
        assert_eq!(diet.weekly_plan[0].snacks.len(), 2);
        assert_eq!(diet.general_advice, "Cook ahead.");
    }

    #[test]
    fn workout_plan_parses_wire_shape() {
        let workout: WorkoutPlan = serde_json::from_str(
            r#"{
                "weeklySplit": [{
                    "day": "Tuesday",
                    "focus": "Legs",
                    "warmup": "5 min bike",
                    "exercises": [{"name": "Squat", "sets": 4, "reps": "8-10", "rest": "90s"}],
                    "cooldown": "Stretch"
                }],
                "progressiveOverloadGuidance": "Add 2.5kg when all reps feel easy.",
                "safetyTips": "Brace your core."
            }"#,
        )
        .unwrap();

        assert_eq!(workout.weekly_split[0].exercises[0].sets, 4);
        assert_eq!(workout.weekly_split[0].exercises[0].reps, "8-10");
    }
}
