//! Service configuration, read from the environment.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Environment variable overriding the plan-generation model.
pub const PLAN_MODEL_ENV: &str = "FITAI_MODEL";
/// Environment variable overriding the coach chat model.
pub const CHAT_MODEL_ENV: &str = "FITAI_CHAT_MODEL";
/// Environment variable overriding the HTTP port.
pub const PORT_ENV: &str = "FITAI_PORT";

/// Default model for assessment, plan generation, and image analysis.
pub const DEFAULT_PLAN_MODEL: &str = "gemini-3-flash-preview";
/// Default model for coach chat.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";
/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key.
    pub api_key: SecretString,
    /// Model used for the structured plan pipeline and image analysis.
    pub plan_model: String,
    /// Model used for coach chat.
    pub chat_model: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl AppConfig {
    /// Build the configuration from the environment.
    ///
    /// `GEMINI_API_KEY` is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ConfigError::MissingEnvVar(API_KEY_ENV.to_string()))?;

        let plan_model =
            std::env::var(PLAN_MODEL_ENV).unwrap_or_else(|_| DEFAULT_PLAN_MODEL.to_string());
        let chat_model =
            std::env::var(CHAT_MODEL_ENV).unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());

        let port = match std::env::var(PORT_ENV) {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            plan_model,
            chat_model,
            port,
        })
    }
}

/// Parse a port value from its environment string.
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidValue {
            key: PORT_ENV.to_string(),
            message: e.to_string(),
        })
}
