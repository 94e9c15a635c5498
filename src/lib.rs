pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Instant;

use axum::Router;
use axum::http::header;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Settings;
use services::completion::CompletionClient;
use services::moderation::ModerationGate;

/// Process-lifetime submission counters. Holds counts only, never content.
#[derive(Debug, Default)]
pub struct PipelineStats {
    pub submissions: AtomicU64,
    pub reports: AtomicU64,
    pub refusals: AtomicU64,
}

pub struct AppState {
    pub settings: Settings,
    pub start_time: Instant,
    pub completion: CompletionClient,
    pub moderation: ModerationGate,
    pub stats: PipelineStats,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        // Both outbound services share one HTTP client and its pool
        let http_client = reqwest::Client::new();

        let completion = CompletionClient::new(
            http_client.clone(),
            &settings.openai_api_base,
            &settings.openai_model,
        );
        let moderation = ModerationGate::new(http_client, &settings.openai_api_base);

        Self {
            settings,
            start_time: Instant::now(),
            completion,
            moderation,
            stats: PipelineStats::default(),
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = build_cors(&state.settings);

    Router::new()
        // Form
        .route("/", get(routes::analyze::form_page))
        // Sentiment
        .route("/api/v1/analyze", post(routes::analyze::analyze))
        // Health
        .route("/health", get(routes::health::health))
        .route("/status", get(routes::health::status))
        .merge(routes::openapi::swagger_ui())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub fn init_tracing(settings: &Settings) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    if settings.log_format == "json" {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    } else {
        fmt().with_env_filter(filter).with_target(true).init();
    }
}

fn build_cors(settings: &Settings) -> CorsLayer {
    let origins = settings.cors_origins_list();

    if origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let allowed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        use axum::http::Method;
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                header::ACCEPT,
                header::ORIGIN,
                header::HeaderName::from_static("x-requested-with"),
            ])
            .allow_credentials(true)
    }
}
