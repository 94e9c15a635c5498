use std::sync::Arc;

use sentiment_analyzer::config::Settings;
use sentiment_analyzer::{AppState, build_router, init_tracing};

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    let settings = Settings::from_env();
    init_tracing(&settings);

    tracing::info!(
        app = %settings.app_name,
        version = %settings.app_version,
        model = %settings.openai_model,
        moderation = settings.moderation_enabled,
        "Starting server"
    );

    let addr = format!("{}:{}", settings.host, settings.port);

    let state = Arc::new(AppState::new(settings));
    let app = build_router(state);

    tracing::info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server error");
}
