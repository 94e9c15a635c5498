use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidCredential(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    Upstream(String),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn invalid_credential(msg: impl Into<String>) -> Self {
        Self::InvalidCredential(msg.into())
    }
    pub fn validation_error(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidCredential(_) => (StatusCode::BAD_REQUEST, "invalid_credential"),
            Self::ValidationError(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream_error"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorBody {
            error: code,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_status_and_code() {
        let cases = [
            (
                AppError::invalid_credential("bad key"),
                StatusCode::BAD_REQUEST,
                "invalid_credential",
            ),
            (
                AppError::validation_error("text is required"),
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
            ),
            (
                AppError::upstream("rate limited"),
                StatusCode::BAD_GATEWAY,
                "upstream_error",
            ),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
            ),
        ];

        for (err, status, code) in cases {
            assert_eq!(err.status_and_code(), (status, code));
        }
    }

    #[test]
    fn upstream_message_is_surfaced() {
        let err = AppError::upstream("Completion API error: Rate limit reached");
        assert_eq!(err.to_string(), "Completion API error: Rate limit reached");
    }

    #[test]
    fn internal_error_hides_its_source() {
        let err = AppError::Internal(anyhow::anyhow!("connection pool poisoned"));
        assert_eq!(err.to_string(), "Internal server error");
    }
}
