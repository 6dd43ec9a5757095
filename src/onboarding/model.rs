//! User profile — the wellness intake record built by the wizard.

use serde::{Deserialize, Serialize};

/// Self-identified gender, used for plan personalization only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// Day-to-day activity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
        };
        write!(f, "{s}")
    }
}

/// The user's training goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "fat loss")]
    FatLoss,
    #[serde(rename = "muscle gain")]
    MuscleGain,
    #[serde(rename = "recomposition")]
    Recomposition,
    #[serde(rename = "endurance")]
    Endurance,
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::FatLoss => "fat loss",
            Self::MuscleGain => "muscle gain",
            Self::Recomposition => "recomposition",
            Self::Endurance => "endurance",
        };
        write!(f, "{s}")
    }
}

/// Training experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        write!(f, "{s}")
    }
}

/// Where the user prefers to train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutPreference {
    Gym,
    Home,
    Both,
}

impl std::fmt::Display for WorkoutPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Gym => "gym",
            Self::Home => "home",
            Self::Both => "both",
        };
        write!(f, "{s}")
    }
}

/// Preferred cuisine style for the meal plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuisineStyle {
    Indian,
    Western,
    #[serde(rename = "Middle Eastern")]
    MiddleEastern,
    Asian,
    Mixed,
}

impl std::fmt::Display for CuisineStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Indian => "Indian",
            Self::Western => "Western",
            Self::MiddleEastern => "Middle Eastern",
            Self::Asian => "Asian",
            Self::Mixed => "Mixed",
        };
        write!(f, "{s}")
    }
}

/// Dietary style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
    #[serde(rename = "mixed")]
    Mixed,
    #[serde(rename = "eggetarian")]
    Eggetarian,
    #[serde(rename = "vegan")]
    Vegan,
}

impl std::fmt::Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
            Self::Mixed => "mixed",
            Self::Eggetarian => "eggetarian",
            Self::Vegan => "vegan",
        };
        write!(f, "{s}")
    }
}

/// Daily meal pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealPattern {
    #[serde(rename = "2 meals")]
    TwoMeals,
    #[serde(rename = "3 meals")]
    ThreeMeals,
    #[serde(rename = "snacker")]
    Snacker,
    #[serde(rename = "skip breakfast")]
    SkipBreakfast,
}

impl std::fmt::Display for MealPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TwoMeals => "2 meals",
            Self::ThreeMeals => "3 meals",
            Self::Snacker => "snacker",
            Self::SkipBreakfast => "skip breakfast",
        };
        write!(f, "{s}")
    }
}

/// The user-entered wellness intake record.
///
/// Accumulated by the wizard, frozen on submission. The assessment and
/// both plans are only ever valid alongside the profile that produced
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    #[serde(rename = "height_cm")]
    pub height_cm: u32,
    #[serde(rename = "weight_kg")]
    pub weight_kg: u32,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub experience_level: ExperienceLevel,
    pub workout_preference: WorkoutPreference,
    pub cuisine_style: CuisineStyle,
    pub diet_type: DietType,
    pub meal_pattern: MealPattern,
    pub sleep_hours: u32,
    /// Glasses per day.
    pub water_intake: u32,
    /// 1-10.
    pub stress_level: u32,
    pub injuries: String,
    pub gym_access: bool,
    pub schedule: String,
    pub workout_days: u32,
    pub workout_duration: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 28,
            gender: Gender::Male,
            height_cm: 170,
            weight_kg: 65,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Recomposition,
            experience_level: ExperienceLevel::Beginner,
            workout_preference: WorkoutPreference::Both,
            cuisine_style: CuisineStyle::Mixed,
            diet_type: DietType::Mixed,
            meal_pattern: MealPattern::ThreeMeals,
            sleep_hours: 7,
            water_intake: 8,
            stress_level: 5,
            injuries: String::new(),
            gym_access: true,
            schedule: "Standard".to_string(),
            workout_days: 3,
            workout_duration: 45,
        }
    }
}

/// Bounds for the wizard's numeric inputs.
///
/// Every numeric field is entered through a bounded control, so a patched
/// profile can never hold an out-of-range value.
pub mod bounds {
    pub const AGE: (u32, u32) = (14, 90);
    pub const HEIGHT_CM: (u32, u32) = (120, 230);
    pub const WEIGHT_KG: (u32, u32) = (30, 200);
    pub const SLEEP_HOURS: (u32, u32) = (4, 12);
    pub const WATER_INTAKE: (u32, u32) = (2, 20);
    pub const STRESS_LEVEL: (u32, u32) = (1, 10);
    pub const WORKOUT_DAYS: (u32, u32) = (1, 7);
    pub const WORKOUT_DURATION: (u32, u32) = (15, 120);
}

fn clamp(value: u32, (min, max): (u32, u32)) -> u32 {
    value.clamp(min, max)
}

/// A partial update to the wizard's profile draft.
///
/// Mirrors the wizard controls: every field optional, numeric fields
/// clamped to their control's range on application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    #[serde(rename = "height_cm")]
    pub height_cm: Option<u32>,
    #[serde(rename = "weight_kg")]
    pub weight_kg: Option<u32>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub experience_level: Option<ExperienceLevel>,
    pub workout_preference: Option<WorkoutPreference>,
    pub cuisine_style: Option<CuisineStyle>,
    pub diet_type: Option<DietType>,
    pub meal_pattern: Option<MealPattern>,
    pub sleep_hours: Option<u32>,
    pub water_intake: Option<u32>,
    pub stress_level: Option<u32>,
    pub injuries: Option<String>,
    pub schedule: Option<String>,
    pub workout_days: Option<u32>,
    pub workout_duration: Option<u32>,
}

impl ProfilePatch {
    /// Apply this patch to a profile draft, clamping numeric fields.
    ///
    /// Choosing a training setting also derives gym access (home-only
    /// training means no gym).
    pub fn apply(&self, profile: &mut UserProfile) {
        if let Some(age) = self.age {
            profile.age = clamp(age, bounds::AGE);
        }
        if let Some(gender) = self.gender {
            profile.gender = gender;
        }
        if let Some(height) = self.height_cm {
            profile.height_cm = clamp(height, bounds::HEIGHT_CM);
        }
        if let Some(weight) = self.weight_kg {
            profile.weight_kg = clamp(weight, bounds::WEIGHT_KG);
        }
        if let Some(level) = self.activity_level {
            profile.activity_level = level;
        }
        if let Some(goal) = self.goal {
            profile.goal = goal;
        }
        if let Some(level) = self.experience_level {
            profile.experience_level = level;
        }
        if let Some(preference) = self.workout_preference {
            profile.workout_preference = preference;
            profile.gym_access = preference != WorkoutPreference::Home;
        }
        if let Some(style) = self.cuisine_style {
            profile.cuisine_style = style;
        }
        if let Some(diet) = self.diet_type {
            profile.diet_type = diet;
        }
        if let Some(pattern) = self.meal_pattern {
            profile.meal_pattern = pattern;
        }
        if let Some(sleep) = self.sleep_hours {
            profile.sleep_hours = clamp(sleep, bounds::SLEEP_HOURS);
        }
        if let Some(water) = self.water_intake {
            profile.water_intake = clamp(water, bounds::WATER_INTAKE);
        }
        if let Some(stress) = self.stress_level {
            profile.stress_level = clamp(stress, bounds::STRESS_LEVEL);
        }
        if let Some(ref injuries) = self.injuries {
            profile.injuries = injuries.clone();
        }
        if let Some(ref schedule) = self.schedule {
            profile.schedule = schedule.clone();
        }
        if let Some(days) = self.workout_days {
            profile.workout_days = clamp(days, bounds::WORKOUT_DAYS);
        }
        if let Some(duration) = self.workout_duration {
            profile.workout_duration = clamp(duration, bounds::WORKOUT_DURATION);
        }
    }
}
