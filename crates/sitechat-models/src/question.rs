//! Request body of `POST /question_on_url`.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// JSON body sent to the answering endpoint: `{"question": "..."}`.
///
/// ```
/// use sitechat_models::QuestionRequest;
///
/// let req = QuestionRequest::new("  where is the pricing page?  ").unwrap();
/// assert_eq!(req.question, "where is the pricing page?");
/// assert!(QuestionRequest::new("   ").is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    /// The visitor's question, trimmed.
    pub question: String,
}

impl QuestionRequest {
    /// Build a request from raw input, trimming surrounding whitespace.
    ///
    /// Returns [`ModelError::EmptyQuestion`] when nothing is left.
    pub fn new(raw: &str) -> Result<Self, ModelError> {
        let question = raw.trim();
        if question.is_empty() {
            return Err(ModelError::EmptyQuestion);
        }
        Ok(Self {
            question: question.to_string(),
        })
    }

    /// Whether the question is blank (possible for deserialized bodies).
    pub fn is_blank(&self) -> bool {
        self.question.trim().is_empty()
    }
}
