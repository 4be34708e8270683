//! Account-scoped order views. Both need the shopper's token.

use async_trait::async_trait;
use serde_json::json;

use wa_domain::error::{Error, Result};

use crate::cards::OrderCard;
use crate::context::{Action, ActionContext};
use crate::message::{Button, CustomPayload, Dispatcher};
use crate::request::ActionRequest;

/// Network trouble gets a retry hint, anything else the generic apology.
fn report(out: &mut Dispatcher, e: Error, what: &str) {
    if e.is_network() {
        tracing::warn!(error = %e, "{what} unavailable");
        out.text(format!("Không thể tải thông tin {what}. Vui lòng thử lại sau."));
    } else {
        tracing::error!(error = %e, "{what} failed");
        out.text(format!("Có lỗi xảy ra khi tải thông tin {what}."));
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Latest orders
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct ShowOrderStatus;

impl ShowOrderStatus {
    async fn show(&self, ctx: &ActionContext, token: &str, out: &mut Dispatcher) -> Result<()> {
        let orders = ctx
            .catalog
            .orders(ctx.config.search.orders_limit, token)
            .await?;
        let statuses = ctx.catalog.order_statuses(token).await?;

        if orders.is_empty() {
            out.text("Bạn chưa có đơn hàng nào.");
            return Ok(());
        }

        let cards = orders
            .into_iter()
            .map(|o| OrderCard::new(o, &statuses))
            .collect();
        out.custom(
            "Đây là danh sách đơn hàng của bạn:",
            CustomPayload::OrderCards { orders: cards },
        );
        Ok(())
    }
}

#[async_trait]
impl Action for ShowOrderStatus {
    fn name(&self) -> &'static str {
        "action_show_order_status"
    }

    async fn run(&self, ctx: &ActionContext, req: &ActionRequest, out: &mut Dispatcher) {
        let Some(token) = req.token() else {
            out.text("Để xem tình trạng đơn hàng, bạn cần đăng nhập trước.");
            return;
        };
        if let Err(e) = self.show(ctx, token, out).await {
            report(out, e, "đơn hàng");
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Status table
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub struct ShowOrderStatuses;

impl ShowOrderStatuses {
    async fn show(&self, ctx: &ActionContext, token: &str, out: &mut Dispatcher) -> Result<()> {
        let statuses = ctx.catalog.order_statuses(token).await?;
        if statuses.is_empty() {
            out.text("Hiện tại chưa có trạng thái đơn hàng nào.");
            return Ok(());
        }

        let buttons = statuses
            .into_iter()
            .map(|s| {
                let name = s.name.unwrap_or_default();
                let color = s.color.unwrap_or_default();
                Button {
                    title: format!("{name} ({color})"),
                    payload: format!("xem đơn hàng trạng thái {}", name.to_lowercase()),
                    id: None,
                    metadata: Some(json!({
                        "status_id": s.id,
                        "status_name": name,
                        "status_description": s.description.unwrap_or_default(),
                        "status_color": color,
                        "intent": "filter_orders_by_status",
                    })),
                }
            })
            .collect();
        out.buttons("Đây là các trạng thái đơn hàng có sẵn:", buttons);
        Ok(())
    }
}

#[async_trait]
impl Action for ShowOrderStatuses {
    fn name(&self) -> &'static str {
        "action_show_order_statuses"
    }

    async fn run(&self, ctx: &ActionContext, req: &ActionRequest, out: &mut Dispatcher) {
        let Some(token) = req.token() else {
            out.text("Để xem trạng thái đơn hàng, bạn cần đăng nhập trước.");
            return;
        };
        if let Err(e) = self.show(ctx, token, out).await {
            report(out, e, "trạng thái đơn hàng");
        }
    }
}
