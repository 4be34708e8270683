pub mod health;
pub mod webhook;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the API router.
///
/// The dialogue engine is the only intended caller; there is no auth layer.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/actions", get(health::list_actions))
        .route("/webhook", post(webhook::webhook))
}
