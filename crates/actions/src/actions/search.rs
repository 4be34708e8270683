//! Free-text product search: signal extraction, lookup resolution, one
//! catalog call, then fallback.

use async_trait::async_trait;

use wa_catalog::{SearchQuery, SearchRequest};
use wa_domain::error::Result;

use crate::actions::filter::FilterProducts;
use crate::cards::{recommendation_cards, search_placeholder, watch_cards};
use crate::compose::{free_text_term, SearchPlan};
use crate::context::{Action, ActionContext};
use crate::fallback::{self, NOT_FOUND_NOTICE};
use crate::message::Dispatcher;
use crate::request::ActionRequest;

const APOLOGY: &str = "Có lỗi xảy ra khi tìm kiếm sản phẩm.";

pub struct SearchProducts;

impl SearchProducts {
    async fn execute(
        &self,
        ctx: &ActionContext,
        plan: SearchPlan,
        token: Option<&str>,
        out: &mut Dispatcher,
    ) -> Result<()> {
        let page_size = ctx.config.search.page_size;
        match plan {
            SearchPlan::Structured { filters, caption } => {
                let req = SearchRequest::first_page(SearchQuery::Structured(filters), page_size);
                let rows = ctx.catalog.search(&req, token).await?;
                if rows.is_empty() {
                    fallback::after_empty_search(ctx, token, NOT_FOUND_NOTICE, out).await;
                } else {
                    out.cards(Some(format!("Kết quả lọc theo {caption}:")), watch_cards(rows));
                }
                Ok(())
            }
            SearchPlan::VagueRecommend => {
                let limit = ctx.config.search.vague_recommend_limit;
                match ctx.catalog.recommendations(limit, token).await {
                    Ok(rows) if !rows.is_empty() => {
                        out.cards(
                            Some("Đây là những đồng hồ được gợi ý dành cho bạn:".into()),
                            recommendation_cards(rows),
                        );
                        return Ok(());
                    }
                    Ok(_) => tracing::debug!("no recommendations for vague query"),
                    Err(e) => tracing::warn!(error = %e, "vague recommendations failed"),
                }
                let term = free_text_term("", true);
                self.free_text(ctx, term, token, out).await
            }
            SearchPlan::FreeText { term } => self.free_text(ctx, term, token, out).await,
        }
    }

    async fn free_text(
        &self,
        ctx: &ActionContext,
        term: String,
        token: Option<&str>,
        out: &mut Dispatcher,
    ) -> Result<()> {
        let req = SearchRequest::first_page(
            SearchQuery::FreeText { term: term.clone() },
            ctx.config.search.page_size,
        );
        let rows = ctx.catalog.search(&req, token).await?;
        if rows.is_empty() {
            let notice = format!("Không tìm thấy sản phẩm nào với từ khóa '{term}'.");
            fallback::after_empty_search(ctx, token, &notice, out).await;
        } else {
            out.cards(
                Some(format!("Đây là kết quả tìm kiếm cho '{term}':")),
                watch_cards(rows),
            );
        }
        Ok(())
    }
}

#[async_trait]
impl Action for SearchProducts {
    fn name(&self) -> &'static str {
        "action_search_products"
    }

    async fn run(&self, ctx: &ActionContext, req: &ActionRequest, out: &mut Dispatcher) {
        // Button clicks carry ids already; the text is not consulted.
        if req.has_filter_metadata() {
            return FilterProducts.run(ctx, req, out).await;
        }

        let token = req.token();
        let signals = ctx.extractor.extract(&req.text);
        let entities = ctx.resolver().resolve_all(&signals.text, token).await;
        let plan = ctx.composer().plan(&signals, &entities);
        let label = free_text_term(&signals.text, plan == SearchPlan::VagueRecommend);

        if let Err(e) = self.execute(ctx, plan, token, out).await {
            if e.is_network() {
                tracing::warn!(error = %e, "search unavailable, showing placeholder");
                fallback::placeholder(
                    out,
                    format!("Đây là kết quả tìm kiếm cho '{label}':"),
                    search_placeholder(),
                );
            } else {
                tracing::error!(error = %e, "search failed");
                out.text(APOLOGY);
            }
        }
    }
}
