//! Chat messages exchanged between the visitor and the answering endpoint.

use serde::{Deserialize, Serialize};

/// Who produced a message.
///
/// The lowercase string form doubles as the CSS modifier class used by the
/// widget (`message sent` / `message received`).
///
/// ```
/// use sitechat_models::Origin;
///
/// assert_eq!(Origin::Sent.as_ref(), "sent");
/// assert_eq!(Origin::Received.as_ref(), "received");
/// ```
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Origin {
    /// Typed by the visitor.
    Sent,
    /// Streamed back by the endpoint.
    Received,
}

/// One entry of the conversation.
///
/// Messages live only in memory for as long as the page does.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Raw text of the message (never pre-formatted).
    pub text: String,
    /// Who produced the message.
    pub origin: Origin,
}

impl Message {
    /// A message typed by the visitor.
    pub fn sent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Sent,
        }
    }

    /// A message produced by the endpoint.
    pub fn received(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Received,
        }
    }

    /// Whether the endpoint produced this message.
    pub fn is_received(&self) -> bool {
        self.origin == Origin::Received
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_origin() {
        assert_eq!(Message::sent("hi").origin, Origin::Sent);
        assert!(Message::received("hello").is_received());
        assert!(!Message::sent("hi").is_received());
    }

    #[test]
    fn origin_serializes_lowercase() {
        let json = serde_json::to_string(&Message::received("ok")).unwrap();
        assert_eq!(json, r#"{"text":"ok","origin":"received"}"#);
    }

    #[test]
    fn origin_display_matches_css_class() {
        assert_eq!(Origin::Sent.to_string(), "sent");
        assert_eq!(Origin::Received.to_string(), "received");
    }
}
