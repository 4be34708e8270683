use serde::Serialize;

/// Structured trace events emitted across all watch-actions crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    CatalogCall {
        endpoint: String,
        status: u16,
        duration_ms: u64,
    },
    SignalsExtracted {
        price_min: Option<u64>,
        price_max: Option<u64>,
        rating: Option<u8>,
        gender: Option<String>,
        styles: usize,
        vague: bool,
    },
    LookupResolved {
        kind: String,
        matched: bool,
        fetch_failed: bool,
    },
    SearchPlanned {
        mode: String,
        params: usize,
    },
    FallbackUsed {
        reason: String,
        cards: usize,
    },
    ActionCompleted {
        action: String,
        responses: usize,
        duration_ms: u64,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "wa_event");
    }
}
