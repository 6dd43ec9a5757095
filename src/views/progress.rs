//! Progress view model — consistency, weight graph, strength stats.

use serde::{Deserialize, Serialize};

/// Graph period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "7 Days")]
    SevenDays,
    #[serde(rename = "14 Days")]
    FourteenDays,
    #[serde(rename = "30 Days")]
    ThirtyDays,
}

impl Period {
    pub const ALL: [Period; 3] = [Self::SevenDays, Self::FourteenDays, Self::ThirtyDays];

    /// Fixed SVG path for the weight graph of this period.
    pub fn graph_path(&self) -> &'static str {
        match self {
            Self::SevenDays => "M0,80 C40,75 80,85 120,70 S160,75 200,60",
            Self::FourteenDays => "M0,90 C40,85 80,95 120,80 S160,85 200,70",
            Self::ThirtyDays => "M0,95 C40,90 80,100 120,85 S160,90 200,75",
        }
    }
}

/// A tracked lift with its week-over-week change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthMetric {
    pub name: String,
    pub previous_weight: f64,
    pub current_weight: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodGraph {
    pub period: Period,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    /// Attendance percentage this month.
    pub consistency: u32,
    pub body_weight: f64,
    pub graphs: Vec<PeriodGraph>,
    pub strength: Vec<StrengthMetric>,
    pub smart_tip: String,
}

impl ProgressView {
    pub fn build() -> Self {
        Self {
            consistency: 92,
            body_weight: 74.2,
            graphs: Period::ALL
                .iter()
                .map(|p| PeriodGraph {
                    period: *p,
                    path: p.graph_path().to_string(),
                })
                .collect(),
            strength: strength_metrics(),
            smart_tip: "Your recovery is improving. Add small weight increases to your next session!"
                .to_string(),
        }
    }
}

fn strength_metrics() -> Vec<StrengthMetric> {
    vec![
        StrengthMetric {
            name: "Squat".to_string(),
            previous_weight: 100.0,
            current_weight: 105.0,
            unit: "kg".to_string(),
        },
        StrengthMetric {
            name: "Bench Press".to_string(),
            previous_weight: 80.0,
            current_weight: 82.5,
            unit: "kg".to_string(),
        },
        StrengthMetric {
            name: "Deadlift".to_string(),
            previous_weight: 140.0,
            current_weight: 145.0,
            unit: "kg".to_string(),
        },
    ]
}
