//! CV-download notification endpoint.

use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::{extract::State, Json};
use tracing::warn;

use folio_core::DownloadEvent;

use crate::routes::client_from_headers;
use crate::routes::visitor::TrackResponse;
use crate::state::AppState;

/// Record a CV download and run the notification sink chain.
/// POST /api/download-notification
///
/// The download itself has already happened client-side; this endpoint
/// is best-effort and reports success even when every sink is down or
/// none is configured.
pub async fn download_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<DownloadEvent>, JsonRejection>,
) -> Json<TrackResponse> {
    let event = match payload {
        Ok(Json(event)) => event,
        Err(rejection) => {
            warn!("Download-notification body rejected: {}", rejection);
            return Json(TrackResponse::rejected("Failed to send notification"));
        }
    };

    let client = client_from_headers(&headers);
    state.notifier.notify_download(&event, &client).await;

    Json(TrackResponse::ok("Notification sent"))
}
