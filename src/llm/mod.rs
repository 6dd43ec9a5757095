//! LLM integration — the hosted generative collaborator.
//!
//! All generative computation (assessment, plans, chat, image analysis) is
//! delegated to Gemini through the [`LlmProvider`] trait. The rest of the
//! service only sees `Arc<dyn LlmProvider>`.

mod gemini;
pub mod provider;

pub use gemini::GeminiProvider;
pub use provider::{
    ChatMessage, CompletionRequest, CompletionResponse, InlineImage, LlmProvider, Role,
};

use std::sync::Arc;

use secrecy::SecretString;

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: SecretString,
    pub model: String,
}

/// Create an LLM provider from configuration.
pub fn create_provider(config: &LlmConfig) -> Arc<dyn LlmProvider> {
    tracing::info!(model = %config.model, "Using Gemini");
    Arc::new(GeminiProvider::new(
        config.api_key.clone(),
        config.model.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_provider_targets_configured_model() {
        let config = LlmConfig {
            api_key: SecretString::from("test-key"),
            model: "gemini-3-flash-preview".to_string(),
        };
        let provider = create_provider(&config);
        assert_eq!(provider.model_name(), "gemini-3-flash-preview");
    }
}
