//! The `CatalogProvider` trait: everything the action layer needs from the
//! shop API. Implemented by the REST client and by in-memory test doubles.

use async_trait::async_trait;
use wa_domain::error::Result;

use crate::query::SearchRequest;
use crate::types::{
    DiscountRecord, LookupItem, LookupKind, OrderRecord, OrderStatusRecord, RecommendationRecord,
    WatchRecord,
};

/// Abstraction over the catalog/search/order API.
///
/// `token` is the shopper's bearer token when the dialogue engine forwarded
/// one. Account-scoped calls require it.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch a reference list (brands, colors, ...).
    async fn list(&self, kind: LookupKind, token: Option<&str>) -> Result<Vec<LookupItem>>;

    /// Product search (GET /v1/search).
    async fn search(&self, req: &SearchRequest, token: Option<&str>) -> Result<Vec<WatchRecord>>;

    /// Suggestions. Personalised with a token, public otherwise.
    async fn recommendations(
        &self,
        limit: u32,
        token: Option<&str>,
    ) -> Result<Vec<RecommendationRecord>>;

    /// The shopper's latest orders (GET /v1/orders).
    async fn orders(&self, limit: u32, token: &str) -> Result<Vec<OrderRecord>>;

    /// Order status table (GET /v1/order-status).
    async fn order_statuses(&self, token: &str) -> Result<Vec<OrderStatusRecord>>;

    /// Active promotions (GET /v1/discounts).
    async fn discounts(&self, token: &str) -> Result<Vec<DiscountRecord>>;
}
