//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK. Every variant is terminal for the request it
//! belongs to; the SDK never retries.

use sitechat_models::ModelError;

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid configuration (e.g. a base URL without a scheme).
    #[error("configuration error: {0}")]
    Config(String),

    /// The question was rejected before anything was sent.
    #[error("invalid question: {0}")]
    Question(#[from] ModelError),

    /// Transport failure: connection refused, DNS, interrupted body...
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint answered {status}: {body}")]
    Status {
        /// Status code returned by the endpoint.
        status: reqwest::StatusCode,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// The endpoint answered successfully but without a body to stream.
    #[error("response has no streamable body")]
    NotStreaming,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_body() {
        let err = SdkError::Status {
            status: reqwest::StatusCode::BAD_REQUEST,
            body: "Domain not processed yet".into(),
        };
        assert_eq!(
            err.to_string(),
            "endpoint answered 400 Bad Request: Domain not processed yet"
        );
    }

    #[test]
    fn question_error_converts() {
        let err: SdkError = ModelError::EmptyQuestion.into();
        assert!(matches!(err, SdkError::Question(ModelError::EmptyQuestion)));
    }
}
