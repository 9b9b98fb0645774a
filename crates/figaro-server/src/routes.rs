//! `/api/turn` endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use figaro_core::outcome::TurnOutcome;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::server::AppState;

/// Body of a turn request.
///
/// `prompt` is the canonical field; `content` is accepted as a fallback so
/// chat-relay clients can forward their payloads unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct TurnRequest {
    /// The user's utterance.
    pub prompt: Option<String>,
    /// Fallback field used by relay clients.
    pub content: Option<String>,
}

impl TurnRequest {
    /// The utterance to run, if a non-blank one was supplied.
    #[must_use]
    pub fn utterance(&self) -> Option<&str> {
        [self.prompt.as_deref(), self.content.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|text| !text.is_empty())
    }
}

/// POST /api/turn
pub async fn turn_handler(
    State(state): State<AppState>,
    Json(request): Json<TurnRequest>,
) -> Response {
    let Some(utterance) = request.utterance() else {
        debug!("turn request carried no usable prompt");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No prompt provided"})),
        )
            .into_response();
    };

    let outcome: TurnOutcome = state.controller.run_turn(utterance).await;
    Json(outcome).into_response()
}
