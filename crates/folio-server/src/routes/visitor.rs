//! Visitor-tracking endpoint.

use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use folio_core::VisitEvent;

use crate::routes::client_from_headers;
use crate::state::AppState;

/// Response envelope for the tracking endpoints.
#[derive(Debug, Serialize)]
pub struct TrackResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TrackResponse {
    pub(crate) fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            error: None,
        }
    }

    pub(crate) fn rejected(error: &str) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
        }
    }
}

/// Record a page visit and forward it to the configured sink.
/// POST /api/visitor-tracking
///
/// Delivery is fire-and-forget: the response reports success whether or
/// not any sink accepted the event.
pub async fn track_visitor(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<VisitEvent>, JsonRejection>,
) -> Json<TrackResponse> {
    let event = match payload {
        Ok(Json(event)) => event,
        Err(rejection) => {
            warn!("Visitor-tracking body rejected: {}", rejection);
            return Json(TrackResponse::rejected("Failed to track visitor"));
        }
    };

    let client = client_from_headers(&headers);
    state.notifier.notify_visit(&event, &client).await;

    Json(TrackResponse::ok("Visitor tracked"))
}
