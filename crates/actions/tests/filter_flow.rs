//! `action_filter_products`: button-click metadata straight to `/v1/search`.

mod common;

use std::sync::Arc;

use wa_actions::ActionRequest;
use wa_catalog::{LookupItem, LookupKind, WatchRecord};

use common::{card_ids, pair, rec, run, watch, Call, Fail, FakeCatalog};

const FILTER: &str = "action_filter_products";

#[tokio::test]
async fn caption_names_come_from_first_row() {
    let row = WatchRecord {
        brand_name: Some("Casio".into()),
        category_name: Some("Đồng hồ nam".into()),
        movement_type_name: Some("Máy pin".into()),
        color_name: Some("Đen".into()),
        ..watch(1, "MTP-1374")
    };
    let fake = Arc::new(FakeCatalog::new().with_search(vec![row, watch(2, "MTP-1375")]));
    let req = ActionRequest::new("")
        .with_meta("brand_id", 1)
        .with_meta("category_id", "3")
        .with_meta("movement_type_id", 4)
        .with_meta("color_id", 7);
    let msgs = run(&fake, FILTER, req).await;

    assert_eq!(
        msgs[0].text.as_deref(),
        Some("Kết quả lọc theo thương hiệu Casio, danh mục Đồng hồ nam, màu sắc Đen, loại máy Máy pin:")
    );
    assert_eq!(card_ids(&msgs[0]), vec!["1", "2"]);
    // Everything was named by the row; no lookups needed.
    assert!(!fake.calls().iter().any(|c| matches!(c, Call::List(_))));
}

#[tokio::test]
async fn color_and_strap_names_fall_back_to_lookup_then_id() {
    let fake = Arc::new(
        FakeCatalog::new()
            .with_list(LookupKind::Color, vec![LookupItem::new("7", "Bạc")])
            .failing_list(LookupKind::StrapMaterial)
            .with_search(vec![watch(1, "A")]),
    );
    let req = ActionRequest::new("")
        .with_meta("color_id", 7)
        .with_meta("material_id", 9)
        .with_meta("brand_id", 2);
    let msgs = run(&fake, FILTER, req).await;

    let q = &fake.searches()[0];
    assert_eq!(pair(q, "color_id__in"), Some("7"));
    assert_eq!(pair(q, "strap_material_id__in"), Some("9"));
    assert_eq!(
        msgs[0].text.as_deref(),
        Some("Kết quả lọc theo thương hiệu ID 2, màu sắc Bạc, dây ID 9:")
    );
}

#[tokio::test]
async fn zero_rating_is_sent_but_not_captioned() {
    let fake = Arc::new(FakeCatalog::new().with_search(vec![watch(1, "A")]));
    let req = ActionRequest::new("").with_meta("rating_min", 0);
    let msgs = run(&fake, FILTER, req).await;
    assert_eq!(pair(&fake.searches()[0], "rating__gte"), Some("0"));
    assert_eq!(msgs[0].text.as_deref(), Some("Kết quả lọc theo bộ lọc:"));
}

#[tokio::test]
async fn gender_rating_and_price_caption() {
    let fake = Arc::new(FakeCatalog::new().with_search(vec![watch(1, "A")]));
    let req = ActionRequest::new("")
        .with_meta("gender", "1")
        .with_meta("rating_min", 4)
        .with_meta("base_price__range", "1000000:3000000");
    let msgs = run(&fake, FILTER, req).await;
    let q = &fake.searches()[0];
    assert_eq!(pair(q, "gender__in"), Some("1"));
    assert_eq!(pair(q, "base_price__range"), Some("1000000:3000000"));
    assert_eq!(
        msgs[0].text.as_deref(),
        Some("Kết quả lọc theo giới tính nữ, đánh giá từ 4 sao, giá từ 1 triệu đến 3 triệu:")
    );
}

#[tokio::test]
async fn raw_gender_and_unparsable_price_pass_through() {
    let fake = Arc::new(FakeCatalog::new().with_search(vec![watch(1, "A")]));
    let req = ActionRequest::new("")
        .with_meta("gender", "unisex")
        .with_meta("base_price_range", "rẻ:đắt");
    let msgs = run(&fake, FILTER, req).await;
    assert_eq!(pair(&fake.searches()[0], "base_price__range"), Some("rẻ:đắt"));
    assert_eq!(
        msgs[0].text.as_deref(),
        Some("Kết quả lọc theo giới tính unisex, giá rẻ:đắt:")
    );
}

#[tokio::test]
async fn empty_filter_result_falls_back() {
    let fake = Arc::new(FakeCatalog::new().with_recommendations(vec![rec(4, "Tissot")]));
    let msgs = run(&fake, FILTER, ActionRequest::new("").with_meta("brand_id", 1)).await;
    assert_eq!(msgs.len(), 2);
    assert!(msgs[0].text.as_deref().unwrap().starts_with("Không tìm thấy"));
    assert_eq!(card_ids(&msgs[1]), vec!["4"]);
}

#[tokio::test]
async fn network_failure_shows_filter_placeholder() {
    let fake = Arc::new(FakeCatalog::new().search_fails(Fail::Network));
    let msgs = run(&fake, FILTER, ActionRequest::new("").with_meta("brand_id", 1)).await;
    assert_eq!(msgs[0].text.as_deref(), Some("Kết quả lọc sản phẩm:"));
    assert_eq!(card_ids(&msgs[0]), vec!["sample-filter-1"]);
}

#[tokio::test]
async fn decode_failure_apologises() {
    let fake = Arc::new(FakeCatalog::new().search_fails(Fail::Decode));
    let msgs = run(&fake, FILTER, ActionRequest::new("").with_meta("brand_id", 1)).await;
    assert_eq!(msgs[0].text.as_deref(), Some("Có lỗi xảy ra khi lọc sản phẩm."));
}
