//! Plan orchestrator — the assessment → (diet ∥ workout) pipeline.

use std::sync::Arc;

use futures::future;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::LlmError;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::onboarding::model::UserProfile;
use crate::plan::model::{Assessment, DietPlan, PlanBundle, WorkoutPlan};
use crate::plan::prompts;

/// Drives one best-effort plan pipeline per submitted profile.
///
/// The assessment request goes out first; both plan requests depend on its
/// output and are only issued once it resolves. The two plan requests run
/// concurrently and both must succeed. There is no retry, timeout, or
/// partial result: any failure fails the whole run.
pub struct PlanOrchestrator {
    llm: Arc<dyn LlmProvider>,
}

impl PlanOrchestrator {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Run the full pipeline for a submitted profile.
    pub async fn generate(&self, profile: &UserProfile) -> Result<PlanBundle, LlmError> {
        info!(goal = %profile.goal, "Starting plan pipeline");

        let assessment = self.fetch_assessment(profile).await?;
        debug!(bmi = assessment.bmi, tdee = assessment.tdee, "Assessment resolved");

        let (diet_plan, workout_plan) = future::try_join(
            self.fetch_diet_plan(&assessment, profile),
            self.fetch_workout_plan(&assessment, profile),
        )
        .await?;

        info!("Plan pipeline complete");
        Ok(PlanBundle {
            assessment,
            diet_plan,
            workout_plan,
        })
    }

    async fn fetch_assessment(&self, profile: &UserProfile) -> Result<Assessment, LlmError> {
        let request =
            CompletionRequest::new(vec![ChatMessage::user(prompts::assessment_prompt(profile))])
                .with_response_schema(prompts::assessment_schema());
        let response = self.llm.complete(request).await?;
        parse_structured(&response.content)
    }

    async fn fetch_diet_plan(
        &self,
        assessment: &Assessment,
        profile: &UserProfile,
    ) -> Result<DietPlan, LlmError> {
        let request = CompletionRequest::new(vec![ChatMessage::user(prompts::diet_prompt(
            assessment, profile,
        ))])
        .with_response_schema(prompts::diet_schema());
        let response = self.llm.complete(request).await?;
        parse_structured(&response.content)
    }

    async fn fetch_workout_plan(
        &self,
        assessment: &Assessment,
        profile: &UserProfile,
    ) -> Result<WorkoutPlan, LlmError> {
        let request = CompletionRequest::new(vec![ChatMessage::user(prompts::workout_prompt(
            assessment, profile,
        ))])
        .with_response_schema(prompts::workout_schema());
        let response = self.llm.complete(request).await?;
        parse_structured(&response.content)
    }
}

/// Optimistic parse of a structured response body.
///
/// An empty body degrades to the all-defaults record (the collaborator is
/// trusted to honor the response schema); malformed JSON is an error.
fn parse_structured<T>(text: &str) -> Result<T, LlmError>
where
    T: Default + DeserializeOwned,
{
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(trimmed).map_err(LlmError::Json)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::llm::CompletionResponse;
    use crate::onboarding::model::{Goal, ProfilePatch};

    const ASSESSMENT_BODY: &str = r#"{
        "bmi": 22.5,
        "bmiClassification": "Healthy range",
        "tdee": 2600,
        "issues": ["Hydration"],
        "primaryFocus": "Lean recomposition",
        "recommendations": "Start slow.",
        "macros": {"protein": 180, "carbs": 280, "fats": 70}
    }"#;

    /// Scripted provider that records call order and can delay or fail the
    /// assessment request.
    struct ScriptedProvider {
        log: Mutex<Vec<String>>,
        assessment_delay: Duration,
        fail_assessment: bool,
        fail_workout: bool,
        empty_assessment: bool,
    }

    impl ScriptedProvider {
        fn new() -> Self {
            Self {
                log: Mutex::new(Vec::new()),
                assessment_delay: Duration::ZERO,
                fail_assessment: false,
                fail_workout: false,
                empty_assessment: false,
            }
        }

        fn kind(request: &CompletionRequest) -> &'static str {
            let schema = request.response_schema.as_ref().expect("structured call");
            let properties = &schema["properties"];
            if properties.get("bmi").is_some() {
                "assessment"
            } else if properties.get("weeklyPlan").is_some() {
                "diet"
            } else {
                "workout"
            }
        }

        fn record(&self, entry: impl Into<String>) {
            self.log.lock().unwrap().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl LlmProvider for ScriptedProvider {
        fn model_name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            let kind = Self::kind(&request);
            self.record(format!("{kind}:start"));

            let failed = |stage: &str| LlmError::RequestFailed {
                provider: "scripted".to_string(),
                reason: format!("{stage} rejected"),
            };

            let content = match kind {
                "assessment" => {
                    tokio::time::sleep(self.assessment_delay).await;
                    if self.fail_assessment {
                        self.record("assessment:error");
                        return Err(failed("assessment"));
                    }
                    if self.empty_assessment {
                        String::new()
                    } else {
                        ASSESSMENT_BODY.to_string()
                    }
                }
                "diet" => {
                    self.record(format!("diet:prompt:{}", request.messages[0].content.clone()));
                    r#"{"weeklyPlan": [], "generalAdvice": "Meal prep on Sundays."}"#.to_string()
                }
                _ => {
                    if self.fail_workout {
                        return Err(failed("workout"));
                    }
                    r#"{"weeklySplit": [], "progressiveOverloadGuidance": "g", "safetyTips": "s"}"#
                        .to_string()
                }
            };

            self.record(format!("{kind}:done"));
            Ok(CompletionResponse {
                content,
                ..Default::default()
            })
        }
    }

    fn orchestrator(provider: Arc<ScriptedProvider>) -> PlanOrchestrator {
        PlanOrchestrator::new(provider)
    }

    #[tokio::test(start_paused = true)]
    async fn plan_requests_wait_for_assessment() {
        let provider = Arc::new(ScriptedProvider {
            assessment_delay: Duration::from_millis(500),
            ..ScriptedProvider::new()
        });
        let bundle = orchestrator(Arc::clone(&provider))
            .generate(&UserProfile::default())
            .await
            .unwrap();

        let entries = provider.entries();
        let done_at = entries
            .iter()
            .position(|e| e == "assessment:done")
            .expect("assessment completed");
        for (i, entry) in entries.iter().enumerate() {
            if entry.starts_with("diet:") || entry.starts_with("workout:") {
                assert!(i > done_at, "{entry} issued before the assessment resolved");
            }
        }
        assert!((bundle.assessment.tdee - 2600.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn rejected_assessment_skips_both_plans() {
        let provider = Arc::new(ScriptedProvider {
            fail_assessment: true,
            ..ScriptedProvider::new()
        });
        let result = orchestrator(Arc::clone(&provider))
            .generate(&UserProfile::default())
            .await;

        assert!(result.is_err());
        let entries = provider.entries();
        assert!(entries.iter().all(|e| !e.starts_with("diet:")));
        assert!(entries.iter().all(|e| !e.starts_with("workout:")));
    }

    #[tokio::test]
    async fn one_failed_plan_fails_the_run() {
        let provider = Arc::new(ScriptedProvider {
            fail_workout: true,
            ..ScriptedProvider::new()
        });
        let result = orchestrator(provider).generate(&UserProfile::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn submitted_values_reach_the_request_payload() {
        let provider = Arc::new(ScriptedProvider::new());
        let mut profile = UserProfile::default();
        ProfilePatch {
            age: Some(45),
            goal: Some(Goal::Endurance),
            ..Default::default()
        }
        .apply(&mut profile);

        orchestrator(Arc::clone(&provider))
            .generate(&profile)
            .await
            .unwrap();

        // The assessment prompt carries the exact final field values, and
        // the diet prompt is keyed off the resolved assessment.
        let entries = provider.entries();
        let diet_prompt = entries
            .iter()
            .find(|e| e.starts_with("diet:prompt:"))
            .expect("diet requested");
        assert!(diet_prompt.contains("2600 kcal"));
        assert!(diet_prompt.contains("180g"));

        let prompt = prompts::assessment_prompt(&profile);
        assert!(prompt.contains("45y"));
        assert!(prompt.contains("endurance"));
    }

    #[tokio::test]
    async fn empty_assessment_body_degrades_to_defaults() {
        let provider = Arc::new(ScriptedProvider {
            empty_assessment: true,
            ..ScriptedProvider::new()
        });
        let bundle = orchestrator(provider)
            .generate(&UserProfile::default())
            .await
            .unwrap();
        assert_eq!(bundle.assessment.bmi, 0.0);
        assert!(bundle.assessment.issues.is_empty());
    }

    #[test]
    fn malformed_structured_body_is_an_error() {
        let result: Result<Assessment, _> = parse_structured("not json at all");
        assert!(result.is_err());
    }
}
