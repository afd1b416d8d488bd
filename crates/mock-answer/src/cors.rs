//! Cross-origin access for pages embedding the widget.

use axum::http::{header, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::MockConfig;

/// CORS layer answering preflights and tagging every response with the
/// configured origin. `*` allows any origin.
pub fn layer(config: &MockConfig) -> CorsLayer {
    let origin = if config.allow_origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(config.allow_origin.clone())
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
