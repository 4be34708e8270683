//! Action registry: name -> action, with one entry point for running a turn.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use wa_domain::trace::TraceEvent;

use crate::actions::{
    FilterProducts, SearchProducts, ShowCatalogList, ShowOrderStatus, ShowOrderStatuses,
    ShowPopularWatches, ShowPriceMenu, ShowPromotions, ShowRatingMenu,
};
use crate::context::{Action, ActionContext};
use crate::message::{BotMessage, Dispatcher};
use crate::request::ActionRequest;

#[derive(Debug, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

/// Registry of actions, keyed by name.
pub struct ActionRegistry {
    actions: HashMap<&'static str, Arc<dyn Action>>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register an action. Returns self for chaining.
    pub fn register(mut self, action: Arc<dyn Action>) -> Self {
        self.actions.insert(action.name(), action);
        self
    }

    /// Registered action names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut v: Vec<_> = self.actions.keys().copied().collect();
        v.sort_unstable();
        v
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Action>> {
        self.actions.get(name)
    }

    /// Run `name` for one turn and collect its messages.
    pub async fn run(
        &self,
        name: &str,
        ctx: &ActionContext,
        req: &ActionRequest,
    ) -> Result<Vec<BotMessage>, UnknownAction> {
        let action = self
            .actions
            .get(name)
            .ok_or_else(|| UnknownAction(name.to_owned()))?;

        let start = Instant::now();
        let mut out = Dispatcher::new();
        action.run(ctx, req, &mut out).await;

        TraceEvent::ActionCompleted {
            action: name.to_owned(),
            responses: out.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        }
        .emit();

        Ok(out.into_messages())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Registry with every built-in action.
pub fn build_default_registry() -> ActionRegistry {
    let mut registry = ActionRegistry::new()
        .register(Arc::new(ShowPriceMenu))
        .register(Arc::new(ShowRatingMenu))
        .register(Arc::new(ShowPopularWatches))
        .register(Arc::new(SearchProducts))
        .register(Arc::new(FilterProducts))
        .register(Arc::new(ShowOrderStatus))
        .register(Arc::new(ShowOrderStatuses))
        .register(Arc::new(ShowPromotions));
    for list in ShowCatalogList::all() {
        registry = registry.register(Arc::new(list));
    }
    registry
}
