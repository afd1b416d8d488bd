//! Canonical endpoint paths.
//!
//! Every URL the SDK calls is built here, so the widget, the SDK and the
//! development server agree on a single path.

/// Endpoint path and URL builders.
///
/// # Examples
///
/// ```
/// use sitechat_sdk::Endpoints;
///
/// assert_eq!(
///     Endpoints::question_on_url("http://localhost:8080"),
///     "http://localhost:8080/question_on_url",
/// );
/// ```
pub struct Endpoints;

impl Endpoints {
    /// Path of the question endpoint.
    pub const QUESTION_ON_URL: &'static str = "/question_on_url";

    /// Absolute URL of the question endpoint under `base_url`.
    pub fn question_on_url(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), Self::QUESTION_ON_URL)
    }
}
