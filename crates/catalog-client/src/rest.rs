//! REST implementation of [`CatalogProvider`].
//!
//! `RestCatalogClient` wraps a `reqwest::Client` and maps every trait method
//! onto one `GET` against the shop API. There is exactly one attempt per
//! call: a refused connection, a timeout and a non-2xx status all surface as
//! network-class errors and the caller decides what to show instead.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use uuid::Uuid;
use wa_domain::config::CatalogConfig;
use wa_domain::error::{Error, Result};
use wa_domain::trace::TraceEvent;

use crate::provider::CatalogProvider;
use crate::query::SearchRequest;
use crate::types::{
    list_under, DiscountRecord, LookupItem, LookupKind, OrderRecord, OrderStatusRecord,
    RecommendationRecord, RecommendationsBody, WatchRecord,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Client
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Created once at startup and shared by every request handler.
/// The underlying `reqwest::Client` maintains a connection pool.
#[derive(Debug, Clone)]
pub struct RestCatalogClient {
    http: Client,
    base_url: String,
    client_type: String,
    timeout: Duration,
}

impl RestCatalogClient {
    pub fn new(cfg: &CatalogConfig) -> Result<Self> {
        let timeout = Duration::from_millis(cfg.timeout_ms);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_owned(),
            client_type: cfg.client_type.clone(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ── request helpers ──────────────────────────────────────────────

    fn decorate(&self, rb: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        let trace_id = Uuid::new_v4().to_string();
        let rb = rb
            .header("X-Client-Type", &self.client_type)
            .header("X-Trace-Id", &trace_id);
        match token {
            Some(t) if !t.is_empty() => rb.bearer_auth(t),
            _ => rb,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one `GET` and return the decoded JSON body.
    ///
    /// Emits a `TraceEvent::CatalogCall` for every attempt, including
    /// transport failures (reported with status 0).
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> Result<Value> {
        let endpoint = format!("GET {path}");
        let rb = self.decorate(self.http.get(self.url(path)).query(query), token);

        let start = Instant::now();
        let result = rb.send().await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                TraceEvent::CatalogCall {
                    endpoint,
                    status: e.status().map(|s| s.as_u16()).unwrap_or(0),
                    duration_ms,
                }
                .emit();
                return Err(from_reqwest(e));
            }
        };

        let status = resp.status();
        TraceEvent::CatalogCall {
            endpoint: endpoint.clone(),
            status: status.as_u16(),
            duration_ms,
        }
        .emit();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Auth(format!("{endpoint} rejected the token ({status})")));
        }
        if !status.is_success() {
            return Err(Error::Upstream {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(from_reqwest)?;
        // Shape mismatches are caught later as `Decode`; a body that does not
        // parse at all is treated like a transport failure.
        serde_json::from_str(&body).map_err(|e| Error::Body(format!("{endpoint}: {e}")))
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Trait implementation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[async_trait]
impl CatalogProvider for RestCatalogClient {
    async fn list(&self, kind: LookupKind, token: Option<&str>) -> Result<Vec<LookupItem>> {
        let body = self.get_json(kind.path(), &[], token).await?;
        list_under(&body, kind.envelope_key())
    }

    async fn search(&self, req: &SearchRequest, token: Option<&str>) -> Result<Vec<WatchRecord>> {
        let body = self
            .get_json("/v1/search", &req.to_query_pairs(), token)
            .await?;
        list_under(&body, "watches")
    }

    async fn recommendations(
        &self,
        limit: u32,
        token: Option<&str>,
    ) -> Result<Vec<RecommendationRecord>> {
        let path = match token {
            Some(t) if !t.is_empty() => "/v1/recommendations",
            _ => "/v1/recommendations/public",
        };
        let body = self
            .get_json(path, &[("limit", limit.to_string())], token)
            .await?;
        let parsed: RecommendationsBody = serde_json::from_value(body)
            .map_err(|e| Error::Decode(format!("GET {path}: {e}")))?;
        Ok(parsed
            .data
            .and_then(|d| d.recommendations)
            .unwrap_or_default())
    }

    async fn orders(&self, limit: u32, token: &str) -> Result<Vec<OrderRecord>> {
        let body = self
            .get_json("/v1/orders", &[("limit", limit.to_string())], Some(token))
            .await?;
        list_under(&body, "orders")
    }

    async fn order_statuses(&self, token: &str) -> Result<Vec<OrderStatusRecord>> {
        let body = self.get_json("/v1/order-status", &[], Some(token)).await?;
        list_under(&body, "orderStatuses")
    }

    async fn discounts(&self, token: &str) -> Result<Vec<DiscountRecord>> {
        let body = self.get_json("/v1/discounts", &[], Some(token)).await?;
        list_under(&body, "discounts")
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Error conversion helper
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Convert a `reqwest::Error` into a domain `Error`.
///
/// Timeout errors become `Error::Timeout`; everything else becomes
/// `Error::Http`.
pub fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let cfg = CatalogConfig {
            base_url: "http://shop.local:8000/".into(),
            ..Default::default()
        };
        let client = RestCatalogClient::new(&cfg).unwrap();
        assert_eq!(client.base_url(), "http://shop.local:8000");
        assert_eq!(client.url("/v1/brands"), "http://shop.local:8000/v1/brands");
        assert_eq!(client.timeout(), Duration::from_millis(10_000));
    }
}
