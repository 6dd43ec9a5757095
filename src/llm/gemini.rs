//! Gemini provider — HTTP client for the Generative Language API.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::LlmError;
use crate::llm::provider::{CompletionRequest, CompletionResponse, LlmProvider, Role};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const PROVIDER: &str = "gemini";

// ── Wire types ──────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

// ── Provider ────────────────────────────────────────────────────────

/// Gemini provider over the Generative Language REST API.
pub struct GeminiProvider {
    api_key: SecretString,
    client: Client,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Self {
        Self {
            api_key,
            client: Client::new(),
            model: model.into(),
        }
    }

    fn build_url(&self) -> String {
        format!(
            "{API_BASE_URL}/models/{}:generateContent?key={}",
            self.model,
            self.api_key.expose_secret()
        )
    }

    /// A system message is carried in `systemInstruction`; user/model turns
    /// become role-tagged contents. An inline image rides along with the
    /// final user turn.
    fn build_request(request: &CompletionRequest) -> GeminiRequest {
        let mut contents: Vec<GeminiContent> = request
            .messages
            .iter()
            .map(|message| GeminiContent {
                role: Some(convert_role(message.role).to_string()),
                parts: vec![Part::Text {
                    text: message.content.clone(),
                }],
            })
            .collect();

        if let Some(ref image) = request.image {
            let part = Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                },
            };
            match contents.last_mut() {
                Some(last) if last.role.as_deref() == Some("user") => {
                    last.parts.insert(0, part);
                }
                _ => contents.push(GeminiContent {
                    role: Some("user".to_string()),
                    parts: vec![part],
                }),
            }
        }

        let system_instruction = request.system.as_ref().map(|system| GeminiContent {
            role: None,
            parts: vec![Part::Text {
                text: system.clone(),
            }],
        });

        let wants_json = request.response_schema.is_some();
        let generation_config = if request.temperature.is_some()
            || request.max_tokens.is_some()
            || wants_json
        {
            Some(GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
                response_mime_type: wants_json.then(|| "application/json".to_string()),
                response_schema: request.response_schema.clone(),
            })
        } else {
            None
        };

        GeminiRequest {
            contents,
            system_instruction,
            generation_config,
        }
    }

    fn extract_content(response: &GeminiResponse) -> String {
        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| match part {
                        Part::Text { text } => Some(text.as_str()),
                        Part::InlineData { .. } => None,
                    })
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }

    fn map_api_error(status: u16, body: &str) -> LlmError {
        let message = serde_json::from_str::<GeminiResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| body.to_string(), |e| e.message);

        match status {
            401 | 403 => LlmError::AuthFailed {
                provider: PROVIDER.to_string(),
            },
            429 => LlmError::RateLimited {
                provider: PROVIDER.to_string(),
            },
            _ => LlmError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: format!("HTTP {status}: {message}"),
            },
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for GeminiProvider {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let url = self.build_url();
        let body = Self::build_request(&request);

        debug!(model = %self.model, "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: format!("Failed to read response body: {e}"),
            })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &text));
        }

        let parsed: GeminiResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::InvalidResponse {
                provider: PROVIDER.to_string(),
                reason: format!("Failed to parse response: {e}"),
            })?;

        if let Some(api_error) = parsed.error {
            return Err(LlmError::RequestFailed {
                provider: PROVIDER.to_string(),
                reason: api_error.message,
            });
        }

        let content = Self::extract_content(&parsed);
        let usage = parsed.usage_metadata;

        Ok(CompletionResponse {
            content,
            input_tokens: usage.as_ref().and_then(|u| u.prompt).unwrap_or(0),
            output_tokens: usage.as_ref().and_then(|u| u.candidates).unwrap_or(0),
        })
    }
}

const fn convert_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Model => "model",
    }
}
