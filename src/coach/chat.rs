//! Coach chat — the conversational coaching session.

use std::sync::Arc;

use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::plan::prompts::FORMAT_RULES;

/// First message of every coaching session.
pub const COACH_GREETING: &str = "Hello! I'm your wellness coach. How are you feeling today?";

/// Shown when the model returns an empty reply.
pub const CHAT_FALLBACK: &str =
    "I'm having a little trouble connecting. Let's try chatting again in a moment!";

/// Appended inline when the chat call itself fails.
pub const CHAT_APOLOGY: &str =
    "I'm having a little trouble connecting. Let's try chatting again in a second!";

/// Canned conversation starters offered alongside the input field.
pub const QUICK_PROMPTS: [&str; 4] = [
    "What should I eat?",
    "Need motivation",
    "Stretches for today",
    "Feeling tired",
];

/// The fixed coach persona sent as the system instruction.
pub fn coach_system_prompt() -> String {
    format!(
        "Persona: A kind, supportive wellness coach.
Tone: Encouraging, patient, and wise. Avoid robotic or hyper-technical language.

Structure:
1. Warm Response: (Friendly acknowledgment)
2. Helpful Suggestion: (1-2 clear ideas)
3. Closing: (A positive wish for their day)
{FORMAT_RULES}"
    )
}

/// An append-only coaching conversation.
///
/// The log is seeded with [`COACH_GREETING`] and grows without bound for
/// the life of the session. Failures never surface as errors: they append
/// a model-authored apology instead.
pub struct CoachChat {
    llm: Arc<dyn LlmProvider>,
    messages: Vec<ChatMessage>,
}

impl CoachChat {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            llm,
            messages: vec![ChatMessage::model(COACH_GREETING)],
        }
    }

    /// The full conversation so far, oldest first.
    pub fn history(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send one user message and append the coach's reply.
    ///
    /// Blank input is ignored. The prior history rides along with every
    /// request so the coach keeps context.
    pub async fn send(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(text));

        let request = CompletionRequest::new(self.messages.clone())
            .with_system(coach_system_prompt());

        let reply = match self.llm.complete(request).await {
            Ok(response) if response.content.trim().is_empty() => CHAT_FALLBACK.to_string(),
            Ok(response) => response.content,
            Err(e) => {
                tracing::warn!(error = %e, "Coach chat call failed");
                CHAT_APOLOGY.to_string()
            }
        };

        self.messages.push(ChatMessage::model(reply.clone()));
        Some(reply)
    }

    /// Start the conversation over with a fresh greeting.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages.push(ChatMessage::model(COACH_GREETING));
    }
}
