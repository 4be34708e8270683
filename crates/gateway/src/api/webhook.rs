//! `POST /webhook`: the Rasa action-server protocol.
//!
//! The dialogue engine names the action to run (`next_action`) and sends
//! the tracker; only the latest user message (text and metadata) is read.
//! Actions never fail, so every known action answers `200`; an unregistered
//! name answers `404`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use wa_actions::{ActionRequest, BotMessage, UnknownAction};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WebhookRequest {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
    /// Sent by Rasa, not used.
    #[serde(default)]
    pub domain: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub latest_message: LatestMessage,
}

#[derive(Debug, Default, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
    /// `null` when the widget attached nothing.
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl WebhookRequest {
    pub fn to_action_request(&self) -> ActionRequest {
        let msg = &self.tracker.latest_message;
        let mut req = ActionRequest::new(msg.text.clone().unwrap_or_default())
            .with_metadata(msg.metadata.clone().unwrap_or_default());
        req.sender_id = self
            .sender_id
            .clone()
            .or_else(|| self.tracker.sender_id.clone());
        req
    }
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    /// Tracker events. Actions here only talk, they never set slots.
    pub events: Vec<Value>,
    pub responses: Vec<BotMessage>,
}

pub async fn webhook(
    State(state): State<AppState>,
    Json(body): Json<WebhookRequest>,
) -> Response {
    let req = body.to_action_request();
    tracing::debug!(
        action = %body.next_action,
        sender_id = req.sender_id.as_deref().unwrap_or("-"),
        has_token = req.token().is_some(),
        "webhook call"
    );

    match state.registry.run(&body.next_action, &state.ctx, &req).await {
        Ok(responses) => Json(WebhookResponse {
            events: Vec::new(),
            responses,
        })
        .into_response(),
        Err(UnknownAction(name)) => {
            tracing::warn!(action = %name, "unknown action requested");
            (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "error": format!("No registered action found for name '{name}'."),
                    "action_name": name,
                })),
            )
                .into_response()
        }
    }
}
