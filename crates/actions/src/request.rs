//! What an action sees of the incoming turn: the utterance and the
//! button-click metadata that came with it.

use serde_json::{Map, Value};

use wa_catalog::StructuredFilters;

use crate::format::plain_value;

/// Metadata keys whose presence routes a search straight to the filter path.
pub const FILTER_METADATA_KEYS: [&str; 8] = [
    "brand_id",
    "category_id",
    "color_id",
    "movement_type_id",
    "material_id",
    "strap_material_id",
    "gender",
    "rating_min",
];

#[derive(Debug, Clone, Default)]
pub struct ActionRequest {
    pub sender_id: Option<String>,
    pub text: String,
    pub metadata: Map<String, Value>,
}

impl ActionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set a single metadata entry (builder style, mostly for tests and the CLI).
    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_owned(), value.into());
        self
    }

    /// Bearer token forwarded by the chat widget, if any.
    pub fn token(&self) -> Option<&str> {
        self.metadata
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    pub fn has_filter_metadata(&self) -> bool {
        FILTER_METADATA_KEYS
            .iter()
            .any(|k| self.metadata.contains_key(*k))
    }

    fn truthy(&self, key: &str) -> Option<String> {
        self.metadata.get(key).and_then(truthy_value)
    }

    fn non_null(&self, key: &str) -> Option<String> {
        self.metadata
            .get(key)
            .filter(|v| !v.is_null())
            .map(plain_value)
    }

    /// The filter values carried by the metadata, each rendered to its
    /// query-string form.
    pub fn metadata_filter(&self) -> MetadataFilter {
        let rating_raw = self.non_null("rating_min");
        let rating_min = self.metadata.get("rating_min").and_then(numeric);
        MetadataFilter {
            filters: StructuredFilters {
                brand_id: self.truthy("brand_id"),
                category_id: self.truthy("category_id"),
                color_id: self.truthy("color_id"),
                movement_type_id: self.truthy("movement_type_id"),
                strap_material_id: self
                    .truthy("strap_material_id")
                    .or_else(|| self.truthy("material_id")),
                gender: self.non_null("gender"),
                rating_gte: rating_raw,
                base_price_range: self
                    .truthy("base_price__range")
                    .or_else(|| self.truthy("base_price_range")),
            },
            rating_min,
        }
    }
}

/// Filters lifted from button metadata. Metadata is authoritative: nothing
/// here is re-derived from the utterance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataFilter {
    pub filters: StructuredFilters,
    /// Numeric reading of `rating_min`, used for the caption only.
    pub rating_min: Option<f64>,
}

/// `null`, `false`, `0` and `""` carry no filter.
fn truthy_value(v: &Value) -> Option<String> {
    match v {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(plain_value(other)),
    }
}

fn numeric(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
