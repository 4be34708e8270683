//! In-memory catalog double shared by the action tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use wa_actions::{build_default_registry, ActionContext, ActionRequest, BotMessage};
use wa_catalog::{
    CatalogProvider, DiscountRecord, LookupItem, LookupKind, OrderRecord, OrderStatusRecord,
    RecommendationRecord, SearchRequest, WatchRecord,
};
use wa_domain::config::Config;
use wa_domain::error::{Error, Result};

/// Every call the fake saw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(LookupKind),
    Search(Vec<(&'static str, String)>),
    Recommendations { limit: u32, authed: bool },
    Orders { limit: u32 },
    OrderStatuses,
    Discounts,
}

/// How a faked endpoint misbehaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fail {
    Network,
    Body,
    Decode,
}

impl Fail {
    fn error(self, endpoint: &str) -> Error {
        match self {
            Fail::Network => Error::Http(format!("{endpoint}: connection refused")),
            Fail::Body => Error::Body(format!("{endpoint}: expected value at line 1 column 1")),
            Fail::Decode => Error::Decode(format!("{endpoint}: expected object")),
        }
    }
}

#[derive(Default)]
struct Script {
    lists: HashMap<LookupKind, Vec<LookupItem>>,
    failing_lists: HashSet<LookupKind>,
    search: Vec<Vec<WatchRecord>>,
    search_fail: Option<Fail>,
    recommendations: Vec<RecommendationRecord>,
    recommendations_fail: Option<Fail>,
    orders: Vec<OrderRecord>,
    orders_fail: Option<Fail>,
    statuses: Vec<OrderStatusRecord>,
    discounts: Vec<DiscountRecord>,
    discounts_fail: Option<Fail>,
}

#[derive(Default)]
pub struct FakeCatalog {
    script: Mutex<Script>,
    calls: Mutex<Vec<Call>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(self, kind: LookupKind, items: Vec<LookupItem>) -> Self {
        self.script.lock().lists.insert(kind, items);
        self
    }

    pub fn failing_list(self, kind: LookupKind) -> Self {
        self.script.lock().failing_lists.insert(kind);
        self
    }

    /// Queue one page of search results; calls past the queue get `[]`.
    pub fn with_search(self, rows: Vec<WatchRecord>) -> Self {
        self.script.lock().search.push(rows);
        self
    }

    pub fn search_fails(self, fail: Fail) -> Self {
        self.script.lock().search_fail = Some(fail);
        self
    }

    pub fn with_recommendations(self, rows: Vec<RecommendationRecord>) -> Self {
        self.script.lock().recommendations = rows;
        self
    }

    pub fn recommendations_fail(self, fail: Fail) -> Self {
        self.script.lock().recommendations_fail = Some(fail);
        self
    }

    pub fn with_orders(self, rows: Vec<OrderRecord>, statuses: Vec<OrderStatusRecord>) -> Self {
        {
            let mut s = self.script.lock();
            s.orders = rows;
            s.statuses = statuses;
        }
        self
    }

    pub fn orders_fail(self, fail: Fail) -> Self {
        self.script.lock().orders_fail = Some(fail);
        self
    }

    pub fn with_discounts(self, rows: Vec<DiscountRecord>) -> Self {
        self.script.lock().discounts = rows;
        self
    }

    pub fn discounts_fail(self, fail: Fail) -> Self {
        self.script.lock().discounts_fail = Some(fail);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Query pairs of every search call.
    pub fn searches(&self) -> Vec<Vec<(&'static str, String)>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Search(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn log(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl CatalogProvider for FakeCatalog {
    async fn list(&self, kind: LookupKind, _token: Option<&str>) -> Result<Vec<LookupItem>> {
        self.log(Call::List(kind));
        let s = self.script.lock();
        if s.failing_lists.contains(&kind) {
            return Err(Fail::Network.error(kind.path()));
        }
        Ok(s.lists.get(&kind).cloned().unwrap_or_default())
    }

    async fn search(&self, req: &SearchRequest, _token: Option<&str>) -> Result<Vec<WatchRecord>> {
        self.log(Call::Search(req.to_query_pairs()));
        let mut s = self.script.lock();
        if let Some(f) = s.search_fail {
            return Err(f.error("/v1/search"));
        }
        if s.search.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(s.search.remove(0))
        }
    }

    async fn recommendations(
        &self,
        limit: u32,
        token: Option<&str>,
    ) -> Result<Vec<RecommendationRecord>> {
        self.log(Call::Recommendations {
            limit,
            authed: token.is_some(),
        });
        let s = self.script.lock();
        if let Some(f) = s.recommendations_fail {
            return Err(f.error("/v1/recommendations"));
        }
        Ok(s.recommendations.iter().take(limit as usize).cloned().collect())
    }

    async fn orders(&self, limit: u32, _token: &str) -> Result<Vec<OrderRecord>> {
        self.log(Call::Orders { limit });
        let s = self.script.lock();
        if let Some(f) = s.orders_fail {
            return Err(f.error("/v1/orders"));
        }
        Ok(s.orders.clone())
    }

    async fn order_statuses(&self, _token: &str) -> Result<Vec<OrderStatusRecord>> {
        self.log(Call::OrderStatuses);
        Ok(self.script.lock().statuses.clone())
    }

    async fn discounts(&self, _token: &str) -> Result<Vec<DiscountRecord>> {
        self.log(Call::Discounts);
        let s = self.script.lock();
        if let Some(f) = s.discounts_fail {
            return Err(f.error("/v1/discounts"));
        }
        Ok(s.discounts.clone())
    }
}

// ── helpers ───────────────────────────────────────────────────────────

pub fn context(fake: Arc<FakeCatalog>) -> ActionContext {
    ActionContext::new(fake, Arc::new(Config::default())).expect("default config builds")
}

pub async fn run(fake: &Arc<FakeCatalog>, action: &str, req: ActionRequest) -> Vec<BotMessage> {
    let ctx = context(fake.clone());
    build_default_registry()
        .run(action, &ctx, &req)
        .await
        .expect("registered action")
}

pub fn watch(id: i64, name: &str) -> WatchRecord {
    WatchRecord {
        id: Some(id.into()),
        name: Some(name.to_owned()),
        ..Default::default()
    }
}

pub fn rec(id: i64, name: &str) -> RecommendationRecord {
    RecommendationRecord {
        watch_id: Some(id.into()),
        name: Some(name.to_owned()),
        ..Default::default()
    }
}

pub fn pair<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.as_str())
}

/// Ids of the product cards in `msg`, rendered.
pub fn card_ids(msg: &BotMessage) -> Vec<String> {
    msg.cards()
        .unwrap_or_default()
        .iter()
        .map(|c| c.id.as_ref().map(ToString::to_string).unwrap_or_default())
        .collect()
}

pub fn wire(msgs: &[BotMessage]) -> Value {
    serde_json::to_value(msgs).expect("messages serialize")
}
