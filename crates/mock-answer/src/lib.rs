//! mock-answer: streams canned answers for widget development.
//!
//! Mimics the production question endpoint closely enough for the widget
//! to exercise every path:
//!
//! * `POST /question_on_url` answers a JSON `{"question": ...}` with a
//!   markdown answer, sent as `text/plain` in small byte chunks (chunk
//!   boundaries deliberately ignore UTF-8 character boundaries).
//! * A blank question, or a server started as "not ready", gets a `400`.
//! * Every route answers CORS preflights so a page on another origin can
//!   embed the widget.
//! * `GET /component/...` serves the built widget bundle, so a host page
//!   only needs `<script src=".../component/...">`.

pub mod answer;
pub mod cors;
pub mod error;

use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Json, State};
use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use futures::StreamExt;
use sitechat_models::QuestionRequest;
use tower_http::services::ServeDir;
use tracing::info;

use crate::error::AnswerError;

/// Path of the question endpoint.
pub const QUESTION_PATH: &str = "/question_on_url";

/// Mount point of the widget bundle.
pub const COMPONENT_PATH: &str = "/component";

/// Behaviour of the mock endpoint.
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Bytes per streamed chunk (at least 1).
    pub chunk_size: usize,
    /// Pause before each chunk.
    pub chunk_delay: Duration,
    /// Value of `Access-Control-Allow-Origin`.
    pub allow_origin: HeaderValue,
    /// When false, every question is refused like an unindexed site.
    pub ready: bool,
    /// Directory served under [`COMPONENT_PATH`] (`dx bundle` output).
    pub component_dir: PathBuf,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            chunk_size: 8,
            chunk_delay: Duration::from_millis(40),
            allow_origin: HeaderValue::from_static("*"),
            ready: true,
            component_dir: PathBuf::from("component"),
        }
    }
}

/// Build the application router.
pub fn router(config: MockConfig) -> Router {
    let cors = cors::layer(&config);
    let bundle = ServeDir::new(&config.component_dir);
    Router::new()
        .route(QUESTION_PATH, post(question_on_url))
        .route("/health", get(health))
        .nest_service(COMPONENT_PATH, bundle)
        .layer(cors)
        .with_state(Arc::new(config))
}

/// `POST /question_on_url`: stream a canned answer.
async fn question_on_url(
    State(config): State<Arc<MockConfig>>,
    Json(req): Json<QuestionRequest>,
) -> Result<Response, AnswerError> {
    if !config.ready {
        return Err(AnswerError::NotReady);
    }
    if req.is_blank() {
        return Err(AnswerError::EmptyQuestion);
    }

    let text = answer::compose(req.question.trim());
    let chunks = answer::split_bytes(text.as_bytes(), config.chunk_size);
    info!(
        question = %req.question,
        bytes = text.len(),
        chunks = chunks.len(),
        "streaming answer"
    );

    let delay = config.chunk_delay;
    let body = futures::stream::iter(chunks).then(move |chunk| async move {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok::<_, Infallible>(chunk)
    });

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        Body::from_stream(body),
    )
        .into_response())
}

/// `GET /health`
async fn health() -> &'static str {
    "ok"
}
