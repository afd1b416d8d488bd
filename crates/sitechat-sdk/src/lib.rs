//! # sitechat SDK
//!
//! Client side of the sitechat question endpoint.
//!
//! The SDK provides:
//!
//! * [`AnswerClient`]: posts a question and follows the streamed answer,
//!   either through callbacks ([`AnswerClient::send`]) or by pulling
//!   snapshots ([`AnswerClient::ask`]).
//! * [`AnswerStream`]: the cumulative text of one answer, grown chunk by
//!   chunk.
//! * [`Utf8StreamDecoder`]: UTF-8 decoding that survives multi-byte
//!   sequences split across chunks.
//! * [`Endpoints`]: canonical endpoint paths.
//! * [`SdkError`]: unified error type for all SDK operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use sitechat_sdk::{AnswerClient, ClientConfig};
//!
//! # async fn run() -> Result<(), sitechat_sdk::SdkError> {
//! let client = AnswerClient::new(ClientConfig::new("http://localhost:8080")?);
//! let mut answer = client.ask("What does this site sell?").await?;
//! while let Some(snapshot) = answer.next_snapshot().await {
//!     println!("{}", snapshot?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod decoder;
pub mod endpoints;
pub mod error;
pub mod stream;

pub use client::AnswerClient;
pub use config::{ClientConfig, DEFAULT_SERVER_URL};
pub use decoder::Utf8StreamDecoder;
pub use endpoints::Endpoints;
pub use error::SdkError;
pub use stream::AnswerStream;

pub use reqwest::StatusCode;
pub use sitechat_models::QuestionRequest;
