//! Error types for the wellness coaching service.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors from the generative-model collaborator.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Provider {provider} request failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("Provider {provider} rate limited")]
    RateLimited { provider: String },

    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Session/state errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("A plan pipeline is already in flight")]
    PipelineInFlight,
}

/// Image analysis input errors.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Invalid image payload: {0}")]
    InvalidPayload(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
