//! Presentation records: product cards, order cards, promotion cards.
//!
//! Product cards come from two API shapes (search rows and recommendations)
//! and always serialize the same camelCase field set; a field the source
//! shape lacks is `null`.

use serde::Serialize;
use serde_json::{json, Value};

use wa_catalog::{
    DiscountRecord, EntityId, OrderRecord, OrderStatusRecord, RecommendationRecord, WatchRecord,
};

use crate::format::{compact_date, plain_value, vnd};
use crate::message::Button;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Product card
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Option<EntityId>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub model: Option<String>,
    pub case_material: Option<String>,
    pub case_size: Option<Value>,
    pub strap_size: Option<Value>,
    pub gender: Option<Value>,
    pub water_resistance: Option<String>,
    pub release_date: Option<String>,
    pub sold: Option<Value>,
    pub base_price: Option<Value>,
    pub rating: Option<Value>,
    pub status: Option<Value>,
    pub thumbnail: Option<String>,
    pub slider: Vec<String>,
    pub brand_id: Option<EntityId>,
    pub brand_name: Option<String>,
    pub category_id: Option<EntityId>,
    pub category_name: Option<String>,
    pub movement_type_id: Option<EntityId>,
    pub movement_type_name: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub color_tags: Option<Vec<String>>,
    pub style_tags: Option<Vec<String>>,
    pub price_tier: Option<Value>,
    pub size_category: Option<Value>,
    pub is_ai_recommended: Option<bool>,
    pub score: Option<Value>,
}

impl From<WatchRecord> for Card {
    fn from(w: WatchRecord) -> Self {
        let slider = match w.slider.as_deref() {
            Some(s) if !s.is_empty() => s.split(',').map(str::to_owned).collect(),
            _ => Vec::new(),
        };
        Card {
            id: w.id,
            code: w.code,
            name: w.name,
            description: w.description,
            model: w.model,
            case_material: w.case_material,
            case_size: w.case_size,
            strap_size: w.strap_size,
            gender: w.gender,
            water_resistance: w.water_resistance,
            release_date: w.release_date,
            sold: w.sold,
            base_price: w.base_price,
            rating: w.rating,
            status: w.status,
            thumbnail: w.thumbnail,
            slider,
            brand_id: w.brand_id,
            brand_name: w.brand_name,
            category_id: w.category_id,
            category_name: w.category_name,
            movement_type_id: w.movement_type_id,
            movement_type_name: w.movement_type_name,
            created_at: w.created_at,
            updated_at: w.updated_at,
            ..Default::default()
        }
    }
}

impl From<RecommendationRecord> for Card {
    fn from(r: RecommendationRecord) -> Self {
        let images = r.images.unwrap_or_default();
        let brand = r.brand.unwrap_or_default();
        let category = r.category.unwrap_or_default();
        Card {
            code: r.watch_id.as_ref().map(|id| format!("REC-{id}")),
            id: r.watch_id,
            model: r.name.clone(),
            name: r.name,
            description: r.description,
            case_material: Some(r.material_tags.unwrap_or_default().join(", ")),
            gender: r.gender_target,
            sold: r.sold,
            base_price: r.base_price,
            rating: r.rating,
            status: Some(Value::Bool(true)),
            thumbnail: images.first().cloned(),
            slider: images,
            brand_id: brand.id,
            brand_name: brand.name,
            category_id: category.id,
            category_name: category.name,
            movement_type_name: Some(r.movement_type_tags.unwrap_or_default().join(", ")),
            color_tags: Some(r.color_tags.unwrap_or_default()),
            style_tags: Some(r.style_tags.unwrap_or_default()),
            price_tier: r.price_tier,
            size_category: r.size_category,
            is_ai_recommended: r.is_ai_recommended,
            score: r.score,
            ..Default::default()
        }
    }
}

pub fn watch_cards(rows: Vec<WatchRecord>) -> Vec<Card> {
    rows.into_iter().map(Card::from).collect()
}

pub fn recommendation_cards(rows: Vec<RecommendationRecord>) -> Vec<Card> {
    rows.into_iter().map(Card::from).collect()
}

// ── placeholder cards shown when the catalog is unreachable ──────────

struct Sample {
    id: &'static str,
    code: &'static str,
    name: &'static str,
    description: &'static str,
    model: &'static str,
    sold: u64,
    base_price: u64,
    rating: u64,
    with_refs: bool,
}

fn sample_card(s: Sample) -> Card {
    let mut card = Card {
        id: Some(EntityId::from(s.id)),
        code: Some(s.code.into()),
        name: Some(s.name.into()),
        description: Some(s.description.into()),
        model: Some(s.model.into()),
        case_material: Some("titan".into()),
        case_size: Some(json!(40)),
        strap_size: Some(json!(20)),
        gender: Some(json!("0")),
        water_resistance: Some("IP68".into()),
        release_date: Some("2025-10-01".into()),
        sold: Some(json!(s.sold)),
        base_price: Some(json!(s.base_price)),
        rating: Some(json!(s.rating)),
        status: Some(Value::Bool(true)),
        thumbnail: Some("https://via.placeholder.com/300x300".into()),
        ..Default::default()
    };
    if s.with_refs {
        card.brand_id = Some(EntityId::from("1"));
        card.brand_name = Some("Sample Brand".into());
        card.category_id = Some(EntityId::from("1"));
        card.category_name = Some("Sample Category".into());
        card.movement_type_id = Some(EntityId::from("1"));
        card.movement_type_name = Some("Sample Movement".into());
        card.created_at = Some("20251017182236".into());
    }
    card
}

pub fn popular_placeholder() -> Card {
    sample_card(Sample {
        id: "sample-1",
        code: "DH-01",
        name: "Đồng hồ mẫu 01",
        description: "Mẫu hot, bán chạy",
        model: "01",
        sold: 10,
        base_price: 2_499_000,
        rating: 5,
        with_refs: false,
    })
}

pub fn search_placeholder() -> Card {
    sample_card(Sample {
        id: "sample-search-1",
        code: "DH-SEARCH",
        name: "Đồng hồ tìm kiếm",
        description: "Kết quả tìm kiếm",
        model: "SEARCH",
        sold: 5,
        base_price: 1_500_000,
        rating: 4,
        with_refs: true,
    })
}

pub fn filter_placeholder() -> Card {
    sample_card(Sample {
        id: "sample-filter-1",
        code: "DH-FILTER",
        name: "Đồng hồ lọc",
        description: "Kết quả lọc",
        model: "FILTER",
        sold: 3,
        base_price: 1_800_000,
        rating: 4,
        with_refs: true,
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Order card
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCard {
    pub id: Option<EntityId>,
    pub code: Option<String>,
    pub customer_name: String,
    pub total_amount: String,
    pub status: String,
    pub status_color: String,
    pub created_date: String,
    pub buttons: Vec<Button>,
}

impl OrderCard {
    /// `statuses` is the order-status table; unknown ids render as
    /// "Không xác định" / "Gray".
    pub fn new(order: OrderRecord, statuses: &[OrderStatusRecord]) -> Self {
        let status = order.current_status_id.as_ref().and_then(|sid| {
            let key = sid.to_string();
            statuses
                .iter()
                .find(|s| s.id.as_ref().is_some_and(|id| id.to_string() == key))
        });
        let status_name = status
            .and_then(|s| s.name.clone())
            .unwrap_or_else(|| "Không xác định".into());
        let status_color = status
            .and_then(|s| s.color.clone())
            .unwrap_or_else(|| "Gray".into());

        let id_text = order.id.as_ref().map(ToString::to_string).unwrap_or_default();
        let code_text = order.code.clone().unwrap_or_default();
        let button = Button {
            title: format!("#{id_text} - {code_text} - {status_name}"),
            payload: format!("xem chi tiết đơn hàng {code_text}"),
            id: None,
            metadata: Some(json!({
                "order_id": order.id,
                "order_code": order.code,
                "status_name": status_name,
                "status_color": status_color,
                "intent": "view_order_detail",
            })),
        };

        OrderCard {
            total_amount: vnd(order.final_amount.as_ref()),
            created_date: compact_date(order.created_at.as_deref()),
            customer_name: order.guess_name.unwrap_or_default(),
            id: order.id,
            code: order.code,
            status: status_name,
            status_color,
            buttons: vec![button],
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Promotion card
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionCard {
    pub id: Option<EntityId>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_value: String,
    pub min_order_value: String,
    pub max_discount_amount: String,
    pub effective_date: String,
    pub valid_until: String,
    pub discount_type: String,
}

impl From<DiscountRecord> for PromotionCard {
    fn from(d: DiscountRecord) -> Self {
        let fixed = d
            .discount_type
            .as_ref()
            .is_some_and(|t| plain_value(t) == "0");
        let discount_value = if fixed {
            vnd(d.discount_value.as_ref())
        } else {
            let raw = d.discount_value.as_ref().map(plain_value);
            format!("{}%", raw.unwrap_or_else(|| "0".into()))
        };
        PromotionCard {
            id: d.id,
            code: d.code,
            name: d.name,
            description: d.description,
            discount_value,
            min_order_value: vnd(d.min_order_value.as_ref()),
            max_discount_amount: vnd(d.max_discount_amount.as_ref()),
            effective_date: compact_date(d.effective_date.as_deref()),
            valid_until: compact_date(d.valid_until.as_deref()),
            discount_type: if fixed { "Giảm cố định" } else { "Giảm phần trăm" }.into(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use wa_catalog::NamedRef;

    #[test]
    fn watch_row_maps_to_card_and_splits_slider() {
        let w: WatchRecord = serde_json::from_value(json!({
            "id": 5,
            "code": "CA-01",
            "name": "Casio MTP",
            "case_size": 40,
            "slider": "a.jpg,b.jpg",
            "brand_id": 1,
            "brand_name": "Casio",
        }))
        .unwrap();
        let card = Card::from(w);
        assert_eq!(card.slider, vec!["a.jpg", "b.jpg"]);
        let v = serde_json::to_value(&card).unwrap();
        assert_eq!(v["brandName"], "Casio");
        assert_eq!(v["caseSize"], 40);
        assert!(v["colorTags"].is_null());
        assert!(v.get("movementTypeName").is_some());
    }

    #[test]
    fn recommendation_maps_to_the_same_shape() {
        let r = RecommendationRecord {
            watch_id: Some(EntityId::Num(11)),
            name: Some("Seiko 5".into()),
            material_tags: Some(vec!["thép".into(), "kính".into()]),
            images: Some(vec!["x.jpg".into(), "y.jpg".into()]),
            brand: Some(NamedRef {
                id: Some(EntityId::Num(2)),
                name: Some("Seiko".into()),
            }),
            movement_type_tags: Some(vec!["automatic".into()]),
            ..Default::default()
        };
        let card = Card::from(r);
        assert_eq!(card.code.as_deref(), Some("REC-11"));
        assert_eq!(card.model.as_deref(), Some("Seiko 5"));
        assert_eq!(card.case_material.as_deref(), Some("thép, kính"));
        assert_eq!(card.thumbnail.as_deref(), Some("x.jpg"));
        assert_eq!(card.status, Some(Value::Bool(true)));
        assert_eq!(card.brand_name.as_deref(), Some("Seiko"));
        assert!(card.category_id.is_none());

        let keys_watch: Vec<String> = serde_json::to_value(Card::default())
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        let keys_rec: Vec<String> = serde_json::to_value(&card)
            .unwrap()
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys_watch, keys_rec);
    }

    #[test]
    fn placeholders_have_stable_ids() {
        assert_eq!(popular_placeholder().id, Some(EntityId::from("sample-1")));
        assert_eq!(search_placeholder().id, Some(EntityId::from("sample-search-1")));
        let f = filter_placeholder();
        assert_eq!(f.id, Some(EntityId::from("sample-filter-1")));
        assert_eq!(f.brand_name.as_deref(), Some("Sample Brand"));
    }

    #[test]
    fn order_card_uses_status_table() {
        let order = OrderRecord {
            id: Some(EntityId::Num(42)),
            code: Some("OD42".into()),
            final_amount: Some(json!(2_499_000)),
            current_status_id: Some(EntityId::Num(2)),
            created_at: Some("20251017182236".into()),
            guess_name: Some("An".into()),
            ..Default::default()
        };
        let statuses = vec![OrderStatusRecord {
            id: Some(EntityId::Text("2".into())),
            name: Some("Đang giao".into()),
            color: Some("Blue".into()),
            ..Default::default()
        }];
        let card = OrderCard::new(order, &statuses);
        assert_eq!(card.total_amount, "2.499.000 VNĐ");
        assert_eq!(card.created_date, "2025-10-17");
        assert_eq!(card.status, "Đang giao");
        assert_eq!(card.buttons[0].title, "#42 - OD42 - Đang giao");
        assert_eq!(card.buttons[0].payload, "xem chi tiết đơn hàng OD42");
    }

    #[test]
    fn unknown_status_falls_back_to_defaults() {
        let card = OrderCard::new(OrderRecord::default(), &[]);
        assert_eq!(card.status, "Không xác định");
        assert_eq!(card.status_color, "Gray");
        assert_eq!(card.created_date, "N/A");
        assert_eq!(card.total_amount, "0 VNĐ");
    }

    #[test]
    fn promotion_value_depends_on_type() {
        let fixed = PromotionCard::from(DiscountRecord {
            discount_type: Some(json!("0")),
            discount_value: Some(json!(50_000)),
            min_order_value: Some(json!(500_000)),
            ..Default::default()
        });
        assert_eq!(fixed.discount_value, "50.000 VNĐ");
        assert_eq!(fixed.discount_type, "Giảm cố định");
        assert_eq!(fixed.min_order_value, "500.000 VNĐ");

        let pct = PromotionCard::from(DiscountRecord {
            discount_type: Some(json!("1")),
            discount_value: Some(json!(15)),
            valid_until: Some("20251231".into()),
            ..Default::default()
        });
        assert_eq!(pct.discount_value, "15%");
        assert_eq!(pct.discount_type, "Giảm phần trăm");
        assert_eq!(pct.valid_until, "2025-12-31");
    }
}
