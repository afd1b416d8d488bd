//! Error types for the mock endpoint.
//!
//! [`AnswerError`] implements [`axum::response::IntoResponse`] so handlers
//! can return `Result<…, AnswerError>` directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Reasons a question is refused.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// The question was blank.
    #[error("question must not be empty")]
    EmptyQuestion,

    /// The server was started with `--not-ready`.
    #[error("Domain processing not completed")]
    NotReady,
}

impl IntoResponse for AnswerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::EmptyQuestion | Self::NotReady => StatusCode::BAD_REQUEST,
        };
        let message = self.to_string();

        tracing::warn!(%status, error = %message, "question refused");
        (status, Json(json!({ "error": message }))).into_response()
    }
}
