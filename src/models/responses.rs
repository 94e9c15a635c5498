use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, ToSchema)]
pub enum Disposition {
    #[serde(rename = "report")]
    Report,
    #[serde(rename = "refusal")]
    Refusal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub disposition: Disposition,
    /// Model output verbatim: the sentiment report, or the refusal notice
    /// when moderation flagged the submission.
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flagged_category: Option<String>,
}

// ── Health / Status ──

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceHealth {
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: NaiveDateTime,
    pub services: HashMap<String, ServiceHealth>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub service: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub statistics: PipelineStatistics,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PipelineStatistics {
    pub submissions_total: u64,
    pub reports_total: u64,
    pub refusals_total: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
