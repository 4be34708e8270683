//! What to show when a search comes back empty or the catalog is down.

use wa_domain::trace::TraceEvent;

use crate::cards::{recommendation_cards, Card};
use crate::context::ActionContext;
use crate::message::Dispatcher;

pub const NOT_FOUND_NOTICE: &str = "Không tìm thấy sản phẩm theo yêu cầu của bạn. Thay vào đó hãy xem thử các sản phẩm bán chạy bên shop:";

/// Empty search: the notice, then best-sellers as a text-less card message.
/// If the recommendation call fails or is empty the notice stands alone.
pub async fn after_empty_search(
    ctx: &ActionContext,
    token: Option<&str>,
    notice: &str,
    out: &mut Dispatcher,
) {
    out.text(notice);

    let limit = ctx.config.search.fallback_recommend_limit;
    let cards = match ctx.catalog.recommendations(limit, token).await {
        Ok(rows) => recommendation_cards(rows),
        Err(e) => {
            tracing::warn!(error = %e, "fallback recommendations unavailable");
            Vec::new()
        }
    };

    TraceEvent::FallbackUsed {
        reason: "empty_search".into(),
        cards: cards.len(),
    }
    .emit();

    if !cards.is_empty() {
        out.cards(None, cards);
    }
}

/// Catalog unreachable: one fixed card under the usual heading. No retry.
pub fn placeholder(out: &mut Dispatcher, text: impl Into<String>, card: Card) {
    TraceEvent::FallbackUsed {
        reason: "network".into(),
        cards: 1,
    }
    .emit();
    out.cards(Some(text.into()), vec![card]);
}
