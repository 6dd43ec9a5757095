//! Provider trait and request/response types for the generative collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// Role of a chat message.
///
/// Mirrors the collaborator's own role vocabulary: the user speaks as
/// `user`, the model replies as `model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// A single role-tagged chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
        }
    }
}

/// An inline image payload attached to a request.
#[derive(Debug, Clone)]
pub struct InlineImage {
    /// Base64-encoded image bytes.
    pub data: String,
    /// Media type, e.g. `image/jpeg`.
    pub mime_type: String,
}

/// A completion request against the collaborator.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation turns, oldest first.
    pub messages: Vec<ChatMessage>,
    /// System instruction, sent out of band from the conversation.
    pub system: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// When set, the provider requests a JSON response conforming to this
    /// schema instead of free text.
    pub response_schema: Option<serde_json::Value>,
    /// Optional inline image attached to the last user turn.
    pub image: Option<InlineImage>,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system: None,
            temperature: None,
            max_tokens: None,
            response_schema: None,
            image: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_response_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }
}

/// A completion response from the collaborator.
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    /// Concatenated text of the first candidate. May be empty.
    pub content: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Abstraction over the hosted generative model.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// The model this provider targets.
    fn model_name(&self) -> &str;

    /// Run a single completion.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors_set_roles() {
        assert_eq!(ChatMessage::user("hi").role, Role::User);
        assert_eq!(ChatMessage::model("hello").role, Role::Model);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
    }

    #[test]
    fn request_builder_chains() {
        let request = CompletionRequest::new(vec![ChatMessage::user("analyze")])
            .with_system("be kind")
            .with_temperature(0.2)
            .with_max_tokens(512)
            .with_response_schema(serde_json::json!({"type": "OBJECT"}));

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.system.as_deref(), Some("be kind"));
        assert_eq!(request.temperature, Some(0.2));
        assert_eq!(request.max_tokens, Some(512));
        assert!(request.response_schema.is_some());
        assert!(request.image.is_none());
    }
}
