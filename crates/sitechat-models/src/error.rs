//! Error types for the `sitechat-models` crate.

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A question was empty once surrounding whitespace was trimmed.
    #[error("question must not be empty")]
    EmptyQuestion,
}
