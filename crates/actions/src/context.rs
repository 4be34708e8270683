//! The `Action` trait and the shared, read-only state every action runs with.

use std::sync::Arc;

use async_trait::async_trait;

use wa_catalog::CatalogProvider;
use wa_domain::config::Config;
use wa_domain::error::Result;
use wa_extract::Extractor;

use crate::compose::FilterComposer;
use crate::message::Dispatcher;
use crate::request::ActionRequest;
use crate::resolver::LookupResolver;

/// Built once at startup; cloned into every request.
#[derive(Clone)]
pub struct ActionContext {
    pub catalog: Arc<dyn CatalogProvider>,
    pub extractor: Arc<Extractor>,
    pub config: Arc<Config>,
}

impl ActionContext {
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: Arc<Config>) -> Result<Self> {
        let extractor = Extractor::new(&config.extraction)?;
        Ok(Self {
            catalog,
            extractor: Arc::new(extractor),
            config,
        })
    }

    pub fn resolver(&self) -> LookupResolver {
        LookupResolver::new(self.catalog.clone())
    }

    pub fn composer(&self) -> FilterComposer {
        FilterComposer::new(&self.config.extraction)
    }
}

/// A named dialogue action. Running never fails: every outcome, including
/// catalog outages, is expressed as messages on the dispatcher.
#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self, ctx: &ActionContext, req: &ActionRequest, out: &mut Dispatcher);
}
