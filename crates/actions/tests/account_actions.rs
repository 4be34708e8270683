//! Orders, order statuses and promotions: token-gated actions.

mod common;

use std::sync::Arc;

use serde_json::json;

use wa_actions::{ActionRequest, CustomPayload};
use wa_catalog::{DiscountRecord, EntityId, OrderRecord, OrderStatusRecord};

use common::{run, wire, Call, Fail, FakeCatalog};

fn signed_in() -> ActionRequest {
    ActionRequest::new("đơn hàng của tôi").with_meta("token", "jwt-abc")
}

#[tokio::test]
async fn account_actions_require_a_token() {
    let fake = Arc::new(FakeCatalog::new());
    for (action, text) in [
        (
            "action_show_order_status",
            "Để xem tình trạng đơn hàng, bạn cần đăng nhập trước.",
        ),
        (
            "action_show_order_statuses",
            "Để xem trạng thái đơn hàng, bạn cần đăng nhập trước.",
        ),
        (
            "action_show_promotions",
            "Để xem khuyến mãi, bạn cần đăng nhập trước.",
        ),
    ] {
        let msgs = run(&fake, action, ActionRequest::new("x")).await;
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].text.as_deref(), Some(text));
    }
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn orders_render_as_order_cards() {
    let orders = vec![OrderRecord {
        id: Some(EntityId::Num(42)),
        code: Some("OD42".into()),
        final_amount: Some(json!(2_499_000)),
        current_status_id: Some(EntityId::Num(2)),
        created_at: Some("20251017182236".into()),
        guess_name: Some("An".into()),
        ..Default::default()
    }];
    let statuses = vec![OrderStatusRecord {
        id: Some(EntityId::Num(2)),
        name: Some("Đang giao".into()),
        color: Some("Blue".into()),
        ..Default::default()
    }];
    let fake = Arc::new(FakeCatalog::new().with_orders(orders, statuses));
    let msgs = run(&fake, "action_show_order_status", signed_in()).await;

    assert_eq!(
        fake.calls(),
        vec![Call::Orders { limit: 5 }, Call::OrderStatuses]
    );
    let v = wire(&msgs);
    assert_eq!(v[0]["text"], "Đây là danh sách đơn hàng của bạn:");
    let card = &v[0]["custom"]["orders"][0];
    assert_eq!(v[0]["custom"]["type"], "order_cards");
    assert_eq!(card["total_amount"], "2.499.000 VNĐ");
    assert_eq!(card["status"], "Đang giao");
    assert_eq!(card["status_color"], "Blue");
    assert_eq!(card["created_date"], "2025-10-17");
    assert_eq!(card["customer_name"], "An");
    assert_eq!(card["buttons"][0]["title"], "#42 - OD42 - Đang giao");
    assert_eq!(card["buttons"][0]["metadata"]["intent"], "view_order_detail");
}

#[tokio::test]
async fn no_orders_message() {
    let fake = Arc::new(FakeCatalog::new());
    let msgs = run(&fake, "action_show_order_status", signed_in()).await;
    assert_eq!(msgs[0].text.as_deref(), Some("Bạn chưa có đơn hàng nào."));
}

#[tokio::test]
async fn order_outage_and_breakage_are_distinguished() {
    let fake = Arc::new(FakeCatalog::new().orders_fail(Fail::Network));
    let msgs = run(&fake, "action_show_order_status", signed_in()).await;
    assert_eq!(
        msgs[0].text.as_deref(),
        Some("Không thể tải thông tin đơn hàng. Vui lòng thử lại sau.")
    );

    let fake = Arc::new(FakeCatalog::new().orders_fail(Fail::Decode));
    let msgs = run(&fake, "action_show_order_status", signed_in()).await;
    assert_eq!(
        msgs[0].text.as_deref(),
        Some("Có lỗi xảy ra khi tải thông tin đơn hàng.")
    );
}

#[tokio::test]
async fn statuses_become_buttons() {
    let statuses = vec![OrderStatusRecord {
        id: Some(EntityId::Num(1)),
        name: Some("Chờ Xác Nhận".into()),
        color: Some("Yellow".into()),
        description: Some("Đơn mới".into()),
        ..Default::default()
    }];
    let fake = Arc::new(FakeCatalog::new().with_orders(Vec::new(), statuses));
    let msgs = run(&fake, "action_show_order_statuses", signed_in()).await;

    assert_eq!(
        msgs[0].text.as_deref(),
        Some("Đây là các trạng thái đơn hàng có sẵn:")
    );
    let b = &msgs[0].buttons[0];
    assert_eq!(b.title, "Chờ Xác Nhận (Yellow)");
    assert_eq!(b.payload, "xem đơn hàng trạng thái chờ xác nhận");
    let meta = b.metadata.as_ref().unwrap();
    assert_eq!(meta["status_id"], 1);
    assert_eq!(meta["intent"], "filter_orders_by_status");
}

#[tokio::test]
async fn empty_status_table() {
    let fake = Arc::new(FakeCatalog::new());
    let msgs = run(&fake, "action_show_order_statuses", signed_in()).await;
    assert_eq!(
        msgs[0].text.as_deref(),
        Some("Hiện tại chưa có trạng thái đơn hàng nào.")
    );
}

#[tokio::test]
async fn promotions_render_as_promotion_cards() {
    let discounts = vec![
        DiscountRecord {
            code: Some("GIAM50K".into()),
            discount_type: Some(json!("0")),
            discount_value: Some(json!(50_000)),
            min_order_value: Some(json!(500_000)),
            max_discount_amount: Some(json!(50_000)),
            effective_date: Some("20251001".into()),
            ..Default::default()
        },
        DiscountRecord {
            code: Some("SALE10".into()),
            discount_type: Some(json!("1")),
            discount_value: Some(json!(10)),
            ..Default::default()
        },
    ];
    let fake = Arc::new(FakeCatalog::new().with_discounts(discounts));
    let msgs = run(&fake, "action_show_promotions", signed_in()).await;

    assert_eq!(
        msgs[0].text.as_deref(),
        Some("Đây là các chương trình khuyến mãi hiện tại:")
    );
    let Some(CustomPayload::PromotionCards { promotions }) = &msgs[0].custom else {
        panic!("expected promotion cards");
    };
    assert_eq!(promotions.len(), 2);
    assert_eq!(promotions[0].discount_value, "50.000 VNĐ");
    assert_eq!(promotions[0].discount_type, "Giảm cố định");
    assert_eq!(promotions[0].effective_date, "2025-10-01");
    assert_eq!(promotions[0].valid_until, "N/A");
    assert_eq!(promotions[1].discount_value, "10%");
    assert_eq!(promotions[1].discount_type, "Giảm phần trăm");
}

#[tokio::test]
async fn promotions_outage_and_empty() {
    let fake = Arc::new(FakeCatalog::new().discounts_fail(Fail::Network));
    let msgs = run(&fake, "action_show_promotions", signed_in()).await;
    assert_eq!(
        msgs[0].text.as_deref(),
        Some("Không thể tải thông tin khuyến mãi. Vui lòng thử lại sau.")
    );

    let fake = Arc::new(FakeCatalog::new());
    let msgs = run(&fake, "action_show_promotions", signed_in()).await;
    assert_eq!(msgs[0].text.as_deref(), Some("Hiện tại chưa có khuyến mãi nào."));
}
