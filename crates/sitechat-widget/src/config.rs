//! Build-time configuration.
//!
//! The widget has no runtime configuration surface: values are read from
//! the environment when the bundle is compiled and baked into it.
//!
//! | Variable            | Default                              | Description                         |
//! |---------------------|--------------------------------------|-------------------------------------|
//! | `SERVER_URL`        | `http://localhost:8080`              | Origin of the question endpoint     |
//! | `SITECHAT_GREETING` | `Hello! How can I assist you today?` | First bot message; empty disables it |

use sitechat_sdk::ClientConfig;
use tracing::warn;

/// Greeting shown when `SITECHAT_GREETING` is not set.
pub const DEFAULT_GREETING: &str = "Hello! How can I assist you today?";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub client: ClientConfig,
    pub greeting: Option<String>,
}

impl WidgetConfig {
    /// Configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SERVER_URL"), option_env!("SITECHAT_GREETING"))
    }

    pub fn from_values(server_url: Option<&str>, greeting: Option<&str>) -> Self {
        let client = ClientConfig::from_optional(server_url).unwrap_or_else(|err| {
            warn!(error = %err, "invalid SERVER_URL, using the default origin");
            ClientConfig::default()
        });
        let greeting = match greeting {
            None => Some(DEFAULT_GREETING.to_string()),
            Some(text) if text.trim().is_empty() => None,
            Some(text) => Some(text.to_string()),
        };
        Self { client, greeting }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
