//! Prompt builders and response schemas for the plan pipeline.

use crate::onboarding::model::UserProfile;
use crate::plan::model::Assessment;

/// Formatting rules appended to every generative request.
pub const FORMAT_RULES: &str = "
FORMATTING RULES:
- Use friendly emojis.
- Keep bullets short and clear.
- Use encouraging language.
- Avoid technical jargon.";

fn injuries_line(profile: &UserProfile) -> &str {
    if profile.injuries.trim().is_empty() {
        "No injuries"
    } else {
        &profile.injuries
    }
}

/// Serialize the profile into the descriptive assessment request.
pub fn assessment_prompt(profile: &UserProfile) -> String {
    format!(
        "Hello! Please analyze this person's wellness profile for a highly personalized plan.

Vitals:
- {age}y, {gender}, {height}cm, {weight}kg.

Lifestyle & Goals:
- Activity: {activity}, Goal: {goal}.
- Training: {experience} level, Prefers {preference}.
- Nutrition: {cuisine} style, {diet} diet, {pattern} pattern.
- Habits: Sleep {sleep}h, Water {water} glasses, Stress {stress}/10.
- Health: {injuries}.

Task:
1. Calculate BMI and give a friendly classification.
2. Estimate daily calorie needs (TDEE).
3. Identify 3-5 main focus areas (incorporate lifestyle habits like sleep/water/stress).
4. Provide a core \"Focus Area\" tag (2-3 words).
5. Daily nutritional targets (Protein, Carbs, Fats in grams).
6. Friendly advice for starting out.
{rules}",
        age = profile.age,
        gender = profile.gender,
        height = profile.height_cm,
        weight = profile.weight_kg,
        activity = profile.activity_level,
        goal = profile.goal,
        experience = profile.experience_level,
        preference = profile.workout_preference,
        cuisine = profile.cuisine_style,
        diet = profile.diet_type,
        pattern = profile.meal_pattern,
        sleep = profile.sleep_hours,
        water = profile.water_intake,
        stress = profile.stress_level,
        injuries = injuries_line(profile),
        rules = FORMAT_RULES,
    )
}

/// Build the meal-plan request from the resolved assessment.
pub fn diet_prompt(assessment: &Assessment, profile: &UserProfile) -> String {
    format!(
        "Create a highly realistic meal plan based on these preferences:
- Style: {cuisine} (e.g. if Indian, include healthy dahl/roti options).
- Pattern: {pattern} (Very important: if skip breakfast, adjust accordingly).
- Calories: {tdee:.0} kcal.
- Protein: {protein:.0}g.

Make it feel culturally relevant and easy to cook.
{rules}",
        cuisine = profile.cuisine_style,
        pattern = profile.meal_pattern,
        tdee = assessment.tdee,
        protein = assessment.macros.protein,
        rules = FORMAT_RULES,
    )
}

/// Build the workout-routine request from the resolved assessment.
pub fn workout_prompt(_assessment: &Assessment, profile: &UserProfile) -> String {
    format!(
        "Design a workout routine tailored to:
- Level: {experience}.
- Preference: {preference}.
- Limitations: {injuries}.
- Goal: {goal}.

Focus on sustainable progress and safety.
{rules}",
        experience = profile.experience_level,
        preference = profile.workout_preference,
        injuries = if profile.injuries.trim().is_empty() {
            "None"
        } else {
            &profile.injuries
        },
        goal = profile.goal,
        rules = FORMAT_RULES,
    )
}

/// Response schema for the assessment endpoint. All fields required.
pub fn assessment_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "bmi": {"type": "NUMBER"},
            "bmiClassification": {"type": "STRING"},
            "tdee": {"type": "NUMBER"},
            "issues": {"type": "ARRAY", "items": {"type": "STRING"}},
            "primaryFocus": {"type": "STRING"},
            "recommendations": {"type": "STRING"},
            "macros": {
                "type": "OBJECT",
                "properties": {
                    "protein": {"type": "NUMBER"},
                    "carbs": {"type": "NUMBER"},
                    "fats": {"type": "NUMBER"}
                },
                "required": ["protein", "carbs", "fats"]
            }
        },
        "required": [
            "bmi", "bmiClassification", "tdee", "issues",
            "primaryFocus", "recommendations", "macros"
        ]
    })
}

/// Response schema for the diet-plan endpoint.
pub fn diet_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "weeklyPlan": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": {"type": "STRING"},
                        "breakfast": {"type": "STRING"},
                        "lunch": {"type": "STRING"},
                        "dinner": {"type": "STRING"},
                        "snacks": {"type": "ARRAY", "items": {"type": "STRING"}},
                        "totalCalories": {"type": "NUMBER"}
                    },
                    "required": [
                        "day", "breakfast", "lunch", "dinner", "snacks", "totalCalories"
                    ]
                }
            },
            "generalAdvice": {"type": "STRING"}
        },
        "required": ["weeklyPlan", "generalAdvice"]
    })
}

/// Response schema for the workout-plan endpoint.
pub fn workout_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "weeklySplit": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": {"type": "STRING"},
                        "focus": {"type": "STRING"},
                        "warmup": {"type": "STRING"},
                        "exercises": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": {"type": "STRING"},
                                    "sets": {"type": "INTEGER"},
                                    "reps": {"type": "STRING"},
                                    "rest": {"type": "STRING"}
                                },
                                "required": ["name", "sets", "reps", "rest"]
                            }
                        },
                        "cooldown": {"type": "STRING"}
                    },
                    "required": ["day", "focus", "warmup", "exercises", "cooldown"]
                }
            },
            "progressiveOverloadGuidance": {"type": "STRING"},
            "safetyTips": {"type": "STRING"}
        },
        "required": ["weeklySplit", "progressiveOverloadGuidance", "safetyTips"]
    })
}
