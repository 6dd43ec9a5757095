//! Health-image analysis — encouraging feedback on meal/form photos.

use std::sync::{Arc, OnceLock};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;

use crate::error::{Error, ImageError};
use crate::llm::{ChatMessage, CompletionRequest, InlineImage, LlmProvider};
use crate::plan::prompts::FORMAT_RULES;

/// Shown when the model returns an empty reply.
pub const IMAGE_FALLBACK: &str = "I couldn't quite see that. Could you try taking the photo again?";

/// Generic reprocessing request shown for any analysis failure.
pub const IMAGE_ERROR_MESSAGE: &str = "We couldn't process the image. Please try again.";

fn analysis_prompt() -> String {
    format!(
        "Look at this health-related image. Provide encouraging feedback and simple observations. {FORMAT_RULES}"
    )
}

/// Analyzes user-supplied health images through the collaborator.
pub struct ImageAnalyzer {
    llm: Arc<dyn LlmProvider>,
}

impl ImageAnalyzer {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Analyze a base64-encoded image of the given media type.
    ///
    /// The payload is decoded for validation only; the collaborator
    /// receives the base64 form as inline data.
    pub async fn analyze(&self, data: &str, mime_type: &str) -> Result<String, Error> {
        if !mime_type.starts_with("image/") {
            return Err(ImageError::UnsupportedMediaType(mime_type.to_string()).into());
        }
        BASE64
            .decode(data.trim())
            .map_err(|e| ImageError::InvalidPayload(e.to_string()))?;

        let request = CompletionRequest::new(vec![ChatMessage::user(analysis_prompt())])
            .with_image(InlineImage {
                data: data.trim().to_string(),
                mime_type: mime_type.to_string(),
            });

        let response = self.llm.complete(request).await.map_err(Error::Llm)?;
        if response.content.trim().is_empty() {
            return Ok(IMAGE_FALLBACK.to_string());
        }
        Ok(response.content)
    }
}

fn bullet_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[•\s*\-]+").expect("valid bullet regex"))
}

/// Strip a leading bullet/dash/whitespace run from a display line.
pub fn strip_bullet_prefix(line: &str) -> &str {
    let trimmed = bullet_prefix().replace(line, "");
    // replace() only borrows when nothing matched; re-slice to keep &str.
    &line[line.len() - trimmed.len()..]
}

/// Split model feedback into clean bullet lines for display.
///
/// Leading bullet markers are stripped and blank lines dropped.
pub fn feedback_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_bullet_prefix(line).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
