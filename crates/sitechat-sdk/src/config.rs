//! Client configuration.

use crate::error::SdkError;

/// Origin used when no server URL was configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Where the question endpoint lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Validate and normalise a base URL (scheme required, trailing `/`
    /// removed).
    ///
    /// ```
    /// use sitechat_sdk::ClientConfig;
    ///
    /// let cfg = ClientConfig::new("https://chat.example.com/").unwrap();
    /// assert_eq!(cfg.base_url(), "https://chat.example.com");
    /// assert!(ClientConfig::new("chat.example.com").is_err());
    /// ```
    pub fn new(base_url: impl Into<String>) -> Result<Self, SdkError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "server URL must start with http:// or https://, got \"{base_url}\""
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Use `value` when present and non-blank, [`DEFAULT_SERVER_URL`]
    /// otherwise.
    pub fn from_optional(value: Option<&str>) -> Result<Self, SdkError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Ok(Self::default()),
        }
    }

    /// The normalised base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local_origin() {
        assert_eq!(ClientConfig::default().base_url(), "http://localhost:8080");
    }

    #[test]
    fn trailing_slashes_are_removed() {
        let cfg = ClientConfig::new("http://a.b:9000//").unwrap();
        assert_eq!(cfg.base_url(), "http://a.b:9000");
    }

    #[test]
    fn scheme_is_required() {
        assert!(matches!(
            ClientConfig::new("ftp://files"),
            Err(SdkError::Config(_))
        ));
    }

    #[test]
    fn missing_or_blank_value_falls_back() {
        assert_eq!(ClientConfig::from_optional(None).unwrap(), ClientConfig::default());
        assert_eq!(
            ClientConfig::from_optional(Some("  ")).unwrap(),
            ClientConfig::default()
        );
        assert_eq!(
            ClientConfig::from_optional(Some("https://x.io")).unwrap().base_url(),
            "https://x.io"
        );
    }
}
