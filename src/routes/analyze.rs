use std::sync::Arc;
use std::sync::atomic::Ordering;

use axum::Json;
use axum::extract::State;
use axum::response::Html;

use crate::AppState;
use crate::error::AppError;
use crate::models::requests::AnalyzeRequest;
use crate::models::responses::{AnalyzeResponse, Disposition, ErrorResponse};
use crate::services::completion::{CLASSIFICATION, REFUSAL_NOTICE};
use crate::services::moderation::ModerationVerdict;
use crate::services::prompt;

const CREDENTIAL_WARNING: &str = "Please enter a valid OpenAI API Key!";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "The analyzer form")),
    tag = "Form"
)]
pub async fn form_page() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

// POST /api/v1/analyze
#[utoipa::path(
    post,
    path = "/api/v1/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, body = AnalyzeResponse, description = "Sentiment report, or refusal notice for flagged input"),
        (status = 400, body = ErrorResponse, description = "Malformed credential"),
        (status = 422, body = ErrorResponse, description = "Invalid submission"),
        (status = 502, body = ErrorResponse, description = "Completion or moderation API failure"),
    ),
    tag = "Sentiment"
)]
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    // Credential shape guard, before any outbound call. Takes precedence
    // over content validation: a malformed key always gets the key warning.
    if !body.credential_is_well_formed() {
        return Err(AppError::invalid_credential(CREDENTIAL_WARNING));
    }

    // Validate
    body.validate_content()
        .map_err(AppError::validation_error)?;

    let text = body.text.trim();
    state.stats.submissions.fetch_add(1, Ordering::Relaxed);

    // Screen the raw input first; the gate is skipped entirely when disabled
    let verdict = if state.settings.moderation_enabled {
        state.moderation.screen(&body.api_key, text).await?
    } else {
        ModerationVerdict::clear()
    };

    if verdict.flagged {
        tracing::warn!(category = %verdict.category, "Submission flagged by moderation");

        let notice = state
            .completion
            .complete(
                &body.api_key,
                prompt::refusal_messages(&verdict.category),
                REFUSAL_NOTICE,
            )
            .await?;

        state.stats.refusals.fetch_add(1, Ordering::Relaxed);
        return Ok(Json(AnalyzeResponse {
            disposition: Disposition::Refusal,
            text: notice,
            flagged_category: Some(verdict.category),
        }));
    }

    let messages = prompt::classification_messages(text, state.settings.moderation_enabled);
    let report = state
        .completion
        .complete(&body.api_key, messages, CLASSIFICATION)
        .await?;

    state.stats.reports.fetch_add(1, Ordering::Relaxed);
    tracing::info!(chars = text.chars().count(), "Submission analyzed");

    Ok(Json(AnalyzeResponse {
        disposition: Disposition::Report,
        text: report,
        flagged_category: None,
    }))
}
