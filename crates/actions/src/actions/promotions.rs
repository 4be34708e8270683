use async_trait::async_trait;

use wa_domain::error::Result;

use crate::cards::PromotionCard;
use crate::context::{Action, ActionContext};
use crate::message::{CustomPayload, Dispatcher};
use crate::request::ActionRequest;

/// Active discount codes for a signed-in shopper.
pub struct ShowPromotions;

impl ShowPromotions {
    async fn show(&self, ctx: &ActionContext, token: &str, out: &mut Dispatcher) -> Result<()> {
        let discounts = ctx.catalog.discounts(token).await?;
        if discounts.is_empty() {
            out.text("Hiện tại chưa có khuyến mãi nào.");
            return Ok(());
        }
        let promotions = discounts.into_iter().map(PromotionCard::from).collect();
        out.custom(
            "Đây là các chương trình khuyến mãi hiện tại:",
            CustomPayload::PromotionCards { promotions },
        );
        Ok(())
    }
}

#[async_trait]
impl Action for ShowPromotions {
    fn name(&self) -> &'static str {
        "action_show_promotions"
    }

    async fn run(&self, ctx: &ActionContext, req: &ActionRequest, out: &mut Dispatcher) {
        let Some(token) = req.token() else {
            out.text("Để xem khuyến mãi, bạn cần đăng nhập trước.");
            return;
        };
        match self.show(ctx, token, out).await {
            Ok(()) => {}
            Err(e) if e.is_network() => {
                tracing::warn!(error = %e, "discounts unavailable");
                out.text("Không thể tải thông tin khuyến mãi. Vui lòng thử lại sau.");
            }
            Err(e) => {
                tracing::error!(error = %e, "promotions failed");
                out.text("Có lỗi xảy ra khi tải thông tin khuyến mãi.");
            }
        }
    }
}
