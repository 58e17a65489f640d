//! Route definitions for the HTTP API.

mod chat;
mod download;
mod health;
mod visitor;

use axum::{
    http::HeaderMap,
    routing::{get, post},
    Router,
};
use folio_core::ClientInfo;

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Chat widget
        .route("/api/chat", post(chat::chat))
        // Analytics notifications
        .route("/api/visitor-tracking", post(visitor::track_visitor))
        .route("/api/download-notification", post(download::download_notification))
        // Attach state
        .with_state(state)
}

/// Extract client metadata from request headers.
///
/// IP comes from `x-forwarded-for` (first hop) or `x-real-ip`; missing
/// headers fall back to the conventional defaults.
pub(crate) fn client_from_headers(headers: &HeaderMap) -> ClientInfo {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let ip = header("x-forwarded-for")
        .or_else(|| header("x-real-ip"))
        .unwrap_or_else(|| "unknown".to_string());
    let user_agent = header("user-agent").unwrap_or_else(|| "unknown".to_string());
    let referer = header("referer").unwrap_or_else(|| "Direct visit".to_string());

    ClientInfo::from_headers(ip, user_agent, referer)
}

pub use chat::*;
pub use download::*;
pub use health::*;
pub use visitor::*;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_client_from_headers_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.3"));

        let info = client_from_headers(&headers);
        assert_eq!(info.ip, "203.0.113.7, 10.0.0.1");
        assert_eq!(info.lookup_ip(), "203.0.113.7");
        assert_eq!(info.user_agent, "unknown");
        assert_eq!(info.referer, "Direct visit");
    }

    #[test]
    fn test_client_from_headers_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.3"));

        let info = client_from_headers(&headers);
        assert_eq!(info.ip, "198.51.100.3");
    }
}
