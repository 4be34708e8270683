use std::sync::Arc;

use wa_actions::{build_default_registry, ActionContext, ActionRegistry};
use wa_catalog::CatalogProvider;
use wa_domain::config::Config;

/// Shared application state passed to all API handlers.
///
/// Everything here is immutable after startup; handlers clone the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub ctx: ActionContext,
    pub registry: Arc<ActionRegistry>,
}

impl AppState {
    /// Wire the action context and the built-in registry around `catalog`.
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: Arc<Config>) -> anyhow::Result<Self> {
        let ctx = ActionContext::new(catalog, config)?;
        let registry = build_default_registry();
        tracing::info!(actions = registry.len(), "action registry ready");
        Ok(Self {
            ctx,
            registry: Arc::new(registry),
        })
    }

    /// Build state against the REST catalog described by `config`.
    pub fn from_config(config: Arc<Config>) -> anyhow::Result<Self> {
        let catalog = wa_catalog::create_provider(&config.catalog)?;
        Self::new(catalog, config)
    }

    pub fn config(&self) -> &Config {
        &self.ctx.config
    }
}
