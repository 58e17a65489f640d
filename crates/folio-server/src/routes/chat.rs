//! Chat endpoint.
//!
//! The widget must always get an answer: a malformed body or any other
//! extraction failure yields the fixed fallback string with a 200, never
//! an error status.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::AppState;

/// Returned whenever the request body cannot be handled.
pub const FALLBACK_RESPONSE: &str = "I'm here to answer questions about Hani's professional background. Feel free to ask about his experience, skills, projects, or education!";

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The visitor's free-text message.
    pub message: String,
}

/// Response envelope for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Answer a chat message.
/// POST /api/chat
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let response = match payload {
        Ok(Json(request)) => state.responder.respond(&request.message),
        Err(rejection) => {
            warn!("Chat request body rejected: {}", rejection);
            FALLBACK_RESPONSE.to_string()
        }
    };

    Json(ChatResponse { response })
}
