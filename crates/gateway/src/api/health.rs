use axum::extract::State;
use axum::response::Json;
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ActionInfo {
    pub name: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /actions`: every registered action, sorted by name.
pub async fn list_actions(State(state): State<AppState>) -> Json<Vec<ActionInfo>> {
    Json(
        state
            .registry
            .names()
            .into_iter()
            .map(|name| ActionInfo { name })
            .collect(),
    )
}
