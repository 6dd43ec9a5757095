use std::sync::Arc;

use fitai::coach::{CoachRouteState, coach_routes};
use fitai::config::AppConfig;
use fitai::llm::{LlmConfig, create_provider};
use fitai::onboarding::{WizardRouteState, wizard_routes};
use fitai::session::{SessionManager, SessionRouteState, session_routes};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export GEMINI_API_KEY=...");
        std::process::exit(1);
    });

    eprintln!("🌱 FitAI Wellness v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Plan model: {}", config.plan_model);
    eprintln!("   Chat model: {}", config.chat_model);
    eprintln!("   Wizard API: http://0.0.0.0:{}/api/wizard", config.port);
    eprintln!("   Views API:  http://0.0.0.0:{}/api/views/dashboard", config.port);
    eprintln!("   Coach API:  http://0.0.0.0:{}/api/coach\n", config.port);

    // One provider per concern: the flash model runs the structured plan
    // pipeline and image analysis, the pro model runs coach chat.
    let plan_llm = create_provider(&LlmConfig {
        api_key: config.api_key.clone(),
        model: config.plan_model.clone(),
    });
    let chat_llm = create_provider(&LlmConfig {
        api_key: config.api_key.clone(),
        model: config.chat_model.clone(),
    });

    let sessions = Arc::new(SessionManager::new(plan_llm, chat_llm));

    // CORS stays permissive: the browser client is served elsewhere.
    let app = session_routes(SessionRouteState {
        sessions: Arc::clone(&sessions),
    })
    .merge(wizard_routes(WizardRouteState {
        manager: sessions.wizard(),
    }))
    .merge(coach_routes(CoachRouteState { sessions }))
    .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Wellness service started");
    axum::serve(listener, app).await?;

    Ok(())
}
