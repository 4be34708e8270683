use async_trait::async_trait;

use crate::cards::{popular_placeholder, recommendation_cards};
use crate::context::{Action, ActionContext};
use crate::fallback;
use crate::message::Dispatcher;
use crate::request::ActionRequest;

const HEADING: &str = "Top mẫu đồng hồ nổi bật/hot hiện tại:";

/// Best-sellers from the recommendation endpoint.
pub struct ShowPopularWatches;

#[async_trait]
impl Action for ShowPopularWatches {
    fn name(&self) -> &'static str {
        "action_show_popular_watches"
    }

    async fn run(&self, ctx: &ActionContext, req: &ActionRequest, out: &mut Dispatcher) {
        let limit = ctx.config.search.popular_limit;
        match ctx.catalog.recommendations(limit, req.token()).await {
            Ok(rows) if rows.is_empty() => out.text("Hiện tại chưa có mẫu đồng hồ nổi bật nào."),
            Ok(rows) => out.cards(Some(HEADING.into()), recommendation_cards(rows)),
            Err(e) if e.is_network() => {
                tracing::warn!(error = %e, "recommendations down, showing placeholder");
                fallback::placeholder(out, HEADING, popular_placeholder());
            }
            Err(e) => {
                tracing::error!(error = %e, "popular watches failed");
                out.text("Có lỗi xảy ra khi tải thông tin đồng hồ bán chạy.");
            }
        }
    }
}
