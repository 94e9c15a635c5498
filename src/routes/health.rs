use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::AppState;
use crate::models::responses::{
    HealthResponse, PipelineStatistics, ServiceHealth, StatusResponse,
};

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, body = HealthResponse, description = "Service health check")),
    tag = "Health"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let mut services = HashMap::new();
    services.insert(
        "completion_api".to_string(),
        ServiceHealth {
            status: "up".to_string(),
        },
    );
    services.insert(
        "moderation_api".to_string(),
        ServiceHealth {
            status: if state.settings.moderation_enabled {
                "up"
            } else {
                "disabled"
            }
            .to_string(),
        },
    );

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().naive_utc(),
        services,
    })
}

#[utoipa::path(
    get,
    path = "/status",
    responses((status = 200, body = StatusResponse, description = "Detailed service status")),
    tag = "Health"
)]
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let uptime = state.start_time.elapsed().as_secs();

    Json(StatusResponse {
        service: state.settings.app_name.clone(),
        version: state.settings.app_version.clone(),
        environment: state.settings.environment.clone(),
        uptime_seconds: uptime,
        statistics: PipelineStatistics {
            submissions_total: state.stats.submissions.load(Ordering::Relaxed),
            reports_total: state.stats.reports.load(Ordering::Relaxed),
            refusals_total: state.stats.refusals.load(Ordering::Relaxed),
        },
        timestamp: Utc::now().naive_utc(),
    })
}
