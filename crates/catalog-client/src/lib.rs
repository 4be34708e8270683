//! `wa-catalog`: client crate for the watch shop's catalog API.
//!
//! Provides the [`CatalogProvider`] trait the action layer is written
//! against, the production [`RestCatalogClient`], the wire DTOs and the
//! [`SearchQuery`] model for `/v1/search`.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use wa_domain::config::CatalogConfig;
//! use wa_catalog::{CatalogProvider, LookupKind, RestCatalogClient};
//!
//! # async fn example() -> wa_domain::error::Result<()> {
//! let client = RestCatalogClient::new(&CatalogConfig::default())?;
//! let brands = client.list(LookupKind::Brand, None).await?;
//! println!("{} brands", brands.len());
//! # Ok(())
//! # }
//! ```

pub mod provider;
pub mod query;
pub mod rest;
pub mod types;

// ── Re-exports for ergonomic imports ─────────────────────────────────

pub use provider::CatalogProvider;
pub use query::{SearchQuery, SearchRequest, StructuredFilters};
pub use rest::{from_reqwest, RestCatalogClient};
pub use types::{
    DiscountRecord, EntityId, LookupItem, LookupKind, NamedRef, OrderRecord, OrderStatusRecord,
    RecommendationRecord, WatchRecord,
};

use std::sync::Arc;

use wa_domain::config::CatalogConfig;
use wa_domain::error::Result;

/// Build the shared provider used by the action server.
pub fn create_provider(cfg: &CatalogConfig) -> Result<Arc<dyn CatalogProvider>> {
    let client = RestCatalogClient::new(cfg)?;
    tracing::info!(
        base_url = %client.base_url(),
        timeout_ms = cfg.timeout_ms,
        "catalog client ready"
    );
    Ok(Arc::new(client))
}
