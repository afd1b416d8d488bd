//! HTTP client for the question endpoint.
//!
//! [`AnswerClient`] posts one question and follows the streamed answer.
//!
//! # Typical usage
//!
//! ```rust,no_run
//! use sitechat_sdk::{AnswerClient, ClientConfig};
//!
//! # async fn run() -> Result<(), sitechat_sdk::SdkError> {
//! let client = AnswerClient::new(ClientConfig::default());
//! client
//!     .send(
//!         "Where can I find the docs?",
//!         |text| println!("so far: {text}"),
//!         |err| eprintln!("failed: {err}"),
//!         || println!("done"),
//!     )
//!     .await;
//! # Ok(())
//! # }
//! ```

use futures::StreamExt;
use sitechat_models::QuestionRequest;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::endpoints::Endpoints;
use crate::error::SdkError;
use crate::stream::AnswerStream;

/// Client for one question endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct AnswerClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl AnswerClient {
    /// Build a client for the endpoint described by `config`.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Post `question` and return the answer as a pull stream.
    ///
    /// Fails before any body is read when the question is blank, the
    /// request cannot be sent, the status is not a success, or the response
    /// carries no body (`204 No Content`).
    pub async fn ask(&self, question: &str) -> Result<AnswerStream, SdkError> {
        let request = QuestionRequest::new(question)?;
        let url = Endpoints::question_on_url(self.config.base_url());
        debug!(%url, chars = request.question.len(), "posting question");

        let res = self.http.post(&url).json(&request).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SdkError::Status { status, body });
        }
        if status == reqwest::StatusCode::NO_CONTENT {
            return Err(SdkError::NotStreaming);
        }

        debug!(%status, "answer stream opened");
        Ok(AnswerStream::from_chunks(
            res.bytes_stream().map(|chunk| chunk.map_err(SdkError::from)),
        ))
    }

    /// Post `question` and report progress through callbacks.
    ///
    /// * `on_chunk` receives the whole answer so far, each time it grows.
    /// * `on_error` is called at most once, on the first failure; nothing
    ///   else is called afterwards.
    /// * `on_done` is called once the stream ends cleanly.
    ///
    /// There is no retry, timeout or cancellation: the call runs until the
    /// stream ends or fails.
    pub async fn send<C, E, D>(&self, question: &str, mut on_chunk: C, on_error: E, on_done: D)
    where
        C: FnMut(&str),
        E: FnOnce(SdkError),
        D: FnOnce(),
    {
        let mut answer = match self.ask(question).await {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "question request failed");
                on_error(err);
                return;
            }
        };

        while let Some(snapshot) = answer.next_snapshot().await {
            match snapshot {
                Ok(text) => on_chunk(text),
                Err(err) => {
                    warn!(error = %err, "answer stream interrupted");
                    on_error(err);
                    return;
                }
            }
        }

        debug!(chars = answer.text().len(), "answer complete");
        on_done();
    }
}
