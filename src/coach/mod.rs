//! Coaching surfaces — conversational coach and health-image analysis.

pub mod chat;
pub mod image;
pub mod routes;

pub use chat::{
    CHAT_APOLOGY, CHAT_FALLBACK, COACH_GREETING, CoachChat, QUICK_PROMPTS, coach_system_prompt,
};
pub use image::{IMAGE_ERROR_MESSAGE, IMAGE_FALLBACK, ImageAnalyzer, feedback_bullets};
pub use routes::{CoachRouteState, coach_routes};
