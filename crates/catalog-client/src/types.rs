//! Wire DTOs for the shop catalog API.
//!
//! The API is loose about types: ids arrive as numbers or strings, prices as
//! integers or decimal strings. Anything that is only forwarded to the
//! presentation layer is kept as a raw [`serde_json::Value`] or decoded
//! leniently as text; only fields the action layer reasons about get strict
//! types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use wa_domain::error::{Error, Result};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Identifiers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Catalog identifier. Opaque: forwarded exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Num(i64),
    Text(String),
}

impl EntityId {
    /// `0` and `""` are how the API spells "no id".
    pub fn is_present(&self) -> bool {
        match self {
            EntityId::Num(n) => *n != 0,
            EntityId::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Num(n) => write!(f, "{n}"),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Text(s.to_owned())
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Num(n)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Reference lists
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The five reference lists the filter engine resolves names against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Brand,
    Category,
    Color,
    MovementType,
    StrapMaterial,
}

impl LookupKind {
    pub const ALL: [LookupKind; 5] = [
        LookupKind::Brand,
        LookupKind::Category,
        LookupKind::Color,
        LookupKind::MovementType,
        LookupKind::StrapMaterial,
    ];

    pub fn path(self) -> &'static str {
        match self {
            LookupKind::Brand => "/v1/brands",
            LookupKind::Category => "/v1/categorys",
            LookupKind::Color => "/v1/colors",
            LookupKind::MovementType => "/v1/movement-type",
            LookupKind::StrapMaterial => "/v1/strap-materials",
        }
    }

    /// Top-level key wrapping the list envelope in the response body.
    pub fn envelope_key(self) -> &'static str {
        match self {
            LookupKind::Brand => "brands",
            LookupKind::Category => "categorys",
            LookupKind::Color => "colors",
            LookupKind::MovementType => "movementTypes",
            LookupKind::StrapMaterial => "strapMaterials",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LookupKind::Brand => "brand",
            LookupKind::Category => "category",
            LookupKind::Color => "color",
            LookupKind::MovementType => "movement_type",
            LookupKind::StrapMaterial => "strap_material",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a reference list (brand, color, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupItem {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "loose_string")]
    pub name: Option<String>,
}

impl LookupItem {
    pub fn new(id: impl Into<EntityId>, name: &str) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.to_owned()),
        }
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// `{ "items": [...] }` or `{ "rows": [...] }`; `items` wins when both exist.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    items: Option<Vec<T>>,
    rows: Option<Vec<T>>,
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.items.or(self.rows).unwrap_or_default()
    }
}

/// Pull `body[key]` out as a list envelope.
///
/// A missing or `null` key is an empty list; a key holding something that is
/// not an envelope is a decode error.
pub fn list_under<T>(body: &Value, key: &str) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    match body.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(v) => serde_json::from_value::<ListEnvelope<T>>(v.clone())
            .map(ListEnvelope::into_vec)
            .map_err(|e| Error::Decode(format!("{key}: {e}"))),
    }
}

// ── lenient field decoding ──────────────────────────────────────────
//
// One row with a number where text was expected must not sink the whole
// page, so display fields accept any scalar.

fn scalar_text(v: Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn loose_string<'de, D>(d: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(d)?))
}

/// An array of scalars; a lone scalar becomes a one-item list.
fn loose_strings<'de, D>(d: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
        other => scalar_text(other).map(|s| vec![s]),
    })
}

/// `true`/`false`, `1`/`0` or their string forms.
fn loose_bool<'de, D>(d: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Products
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A product row from `/v1/search` (`watches.items[]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchRecord {
    pub id: Option<EntityId>,
    #[serde(deserialize_with = "loose_string")]
    pub code: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub model: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub case_material: Option<String>,
    pub case_size: Option<Value>,
    pub strap_size: Option<Value>,
    pub gender: Option<Value>,
    #[serde(deserialize_with = "loose_string")]
    pub water_resistance: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub release_date: Option<String>,
    pub sold: Option<Value>,
    pub base_price: Option<Value>,
    pub rating: Option<Value>,
    pub status: Option<Value>,
    #[serde(deserialize_with = "loose_string")]
    pub thumbnail: Option<String>,
    /// Comma-separated image URLs.
    #[serde(deserialize_with = "loose_string")]
    pub slider: Option<String>,
    pub brand_id: Option<EntityId>,
    #[serde(deserialize_with = "loose_string")]
    pub brand_name: Option<String>,
    pub category_id: Option<EntityId>,
    #[serde(deserialize_with = "loose_string")]
    pub category_name: Option<String>,
    pub movement_type_id: Option<EntityId>,
    #[serde(deserialize_with = "loose_string")]
    pub movement_type_name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub color_name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub strap_material_name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub material_name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "loose_string")]
    pub name: Option<String>,
}

/// A suggestion from `/v1/recommendations[/public]`
/// (`data.recommendations[]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRecord {
    pub watch_id: Option<EntityId>,
    #[serde(deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "loose_strings")]
    pub material_tags: Option<Vec<String>>,
    pub gender_target: Option<Value>,
    pub sold: Option<Value>,
    pub base_price: Option<Value>,
    pub rating: Option<Value>,
    #[serde(deserialize_with = "loose_strings")]
    pub images: Option<Vec<String>>,
    pub brand: Option<NamedRef>,
    pub category: Option<NamedRef>,
    #[serde(deserialize_with = "loose_strings")]
    pub movement_type_tags: Option<Vec<String>>,
    #[serde(deserialize_with = "loose_strings")]
    pub color_tags: Option<Vec<String>>,
    #[serde(deserialize_with = "loose_strings")]
    pub style_tags: Option<Vec<String>>,
    pub price_tier: Option<Value>,
    pub size_category: Option<Value>,
    #[serde(deserialize_with = "loose_bool")]
    pub is_ai_recommended: Option<bool>,
    pub score: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecommendationsBody {
    #[serde(default)]
    pub data: Option<RecommendationsData>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecommendationsData {
    #[serde(default)]
    pub recommendations: Option<Vec<RecommendationRecord>>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Account-scoped records
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `/v1/orders` (`orders.items[]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRecord {
    pub id: Option<EntityId>,
    #[serde(deserialize_with = "loose_string")]
    pub code: Option<String>,
    pub total_amount: Option<Value>,
    pub final_amount: Option<Value>,
    pub current_status_id: Option<EntityId>,
    /// `YYYYMMDDhhmmss`.
    #[serde(deserialize_with = "loose_string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub guess_name: Option<String>,
}

/// `/v1/order-status` (`orderStatuses.rows[]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderStatusRecord {
    pub id: Option<EntityId>,
    #[serde(deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub color: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub hex_code: Option<String>,
}

/// `/v1/discounts` (`discounts.items[]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountRecord {
    pub id: Option<EntityId>,
    #[serde(deserialize_with = "loose_string")]
    pub code: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub description: Option<String>,
    pub min_order_value: Option<Value>,
    pub max_discount_amount: Option<Value>,
    /// `"0"` = fixed amount, anything else = percentage.
    pub discount_type: Option<Value>,
    pub discount_value: Option<Value>,
    #[serde(deserialize_with = "loose_string")]
    pub effective_date: Option<String>,
    #[serde(deserialize_with = "loose_string")]
    pub valid_until: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entity_id_accepts_numbers_and_strings() {
        let ids: Vec<EntityId> = serde_json::from_value(json!([7, "a1"])).unwrap();
        assert_eq!(ids, vec![EntityId::Num(7), EntityId::Text("a1".into())]);
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(ids[1].to_string(), "a1");
    }

    #[test]
    fn zero_and_empty_ids_are_absent() {
        assert!(!EntityId::Num(0).is_present());
        assert!(!EntityId::Text(String::new()).is_present());
        assert!(EntityId::Text("0".into()).is_present());
    }

    #[test]
    fn envelope_reads_items_or_rows() {
        let body = json!({
            "brands": { "items": [{ "id": 1, "name": "Casio" }] },
            "strapMaterials": { "rows": [{ "id": "s2", "name": "Da" }] },
        });
        let brands: Vec<LookupItem> = list_under(&body, "brands").unwrap();
        let straps: Vec<LookupItem> = list_under(&body, "strapMaterials").unwrap();
        assert_eq!(brands, vec![LookupItem::new(1, "Casio")]);
        assert_eq!(straps, vec![LookupItem::new("s2", "Da")]);
    }

    #[test]
    fn missing_envelope_is_empty_but_wrong_shape_is_an_error() {
        let body = json!({ "colors": "oops" });
        let missing: Vec<LookupItem> = list_under(&body, "brands").unwrap();
        assert!(missing.is_empty());
        let err = list_under::<LookupItem>(&body, "colors").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn watch_record_tolerates_sparse_rows() {
        let w: WatchRecord = serde_json::from_value(json!({
            "id": 3,
            "name": "Orient Bambino",
            "base_price": "3500000.00",
            "slider": "a.jpg,b.jpg",
            "unknown_field": true,
        }))
        .unwrap();
        assert_eq!(w.id, Some(EntityId::Num(3)));
        assert_eq!(w.base_price, Some(json!("3500000.00")));
        assert!(w.brand_name.is_none());
    }

    #[test]
    fn mixed_scalar_types_do_not_sink_the_page() {
        let body = json!({
            "watches": { "items": [
                { "id": 1, "water_resistance": 50, "code": 123, "brand_name": null },
                { "id": 2, "water_resistance": "5ATM", "thumbnail": { "url": "x" } },
            ] }
        });
        let rows: Vec<WatchRecord> = list_under(&body, "watches").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].water_resistance.as_deref(), Some("50"));
        assert_eq!(rows[0].code.as_deref(), Some("123"));
        assert!(rows[0].brand_name.is_none());
        assert_eq!(rows[1].water_resistance.as_deref(), Some("5ATM"));
        assert!(rows[1].thumbnail.is_none());
    }

    #[test]
    fn recommendation_flags_and_tags_are_lenient() {
        let recs: Vec<RecommendationRecord> = serde_json::from_value(json!([
            { "watch_id": 1, "is_ai_recommended": 1, "images": ["a.jpg", 7, null] },
            { "watch_id": 2, "is_ai_recommended": "false", "color_tags": "Đen" },
        ]))
        .unwrap();
        assert_eq!(recs[0].is_ai_recommended, Some(true));
        assert_eq!(recs[0].images, Some(vec!["a.jpg".to_string(), "7".to_string()]));
        assert_eq!(recs[1].is_ai_recommended, Some(false));
        assert_eq!(recs[1].color_tags, Some(vec!["Đen".to_string()]));
    }

    #[test]
    fn numeric_lookup_names_keep_the_list() {
        let body = json!({ "colors": { "items": [
            { "id": 1, "name": 1990 },
            { "id": 2, "name": "Đen" },
        ] } });
        let colors: Vec<LookupItem> = list_under(&body, "colors").unwrap();
        assert_eq!(colors[0].name.as_deref(), Some("1990"));
        assert_eq!(colors[1], LookupItem::new(2, "Đen"));
    }

    #[test]
    fn order_code_and_date_accept_numbers() {
        let o: OrderRecord = serde_json::from_value(json!({
            "id": 4, "code": 777, "created_at": 20251017182236u64
        }))
        .unwrap();
        assert_eq!(o.code.as_deref(), Some("777"));
        assert_eq!(o.created_at.as_deref(), Some("20251017182236"));
    }
}
