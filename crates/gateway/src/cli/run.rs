//! `watch-actions run`: one action, one turn, printed as the webhook
//! would return it. Handy for poking a live catalog from a shell.

use std::sync::Arc;

use anyhow::Context;
use serde_json::{Map, Value};

use wa_actions::ActionRequest;
use wa_domain::config::Config;

use crate::state::AppState;

pub async fn run(
    config: Arc<Config>,
    action: String,
    text: String,
    token: Option<String>,
    metadata: Option<String>,
) -> anyhow::Result<()> {
    let req = build_request(text, token, metadata.as_deref())?;
    let state = AppState::from_config(config)?;

    let responses = state
        .registry
        .run(&action, &state.ctx, &req)
        .await
        .with_context(|| format!("known actions: {}", state.registry.names().join(", ")))?;

    println!("{}", serde_json::to_string_pretty(&responses)?);
    Ok(())
}

/// `--metadata` must be a JSON object; `--token` lands under `token`.
fn build_request(
    text: String,
    token: Option<String>,
    metadata: Option<&str>,
) -> anyhow::Result<ActionRequest> {
    let mut meta = match metadata {
        Some(raw) => serde_json::from_str::<Map<String, Value>>(raw)
            .context("--metadata must be a JSON object")?,
        None => Map::new(),
    };
    if let Some(token) = token {
        meta.insert("token".into(), Value::String(token));
    }
    let mut req = ActionRequest::new(text).with_metadata(meta);
    req.sender_id = Some("cli".into());
    Ok(req)
}
