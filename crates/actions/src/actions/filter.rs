//! Metadata-driven filtering: the ids arrive with the button click, so the
//! query is built straight from metadata and the utterance is ignored.

use async_trait::async_trait;

use wa_catalog::{LookupKind, SearchQuery, SearchRequest, WatchRecord};
use wa_domain::error::Result;

use crate::cards::{filter_placeholder, watch_cards};
use crate::compose::{join_caption, price_param_caption};
use crate::context::{Action, ActionContext};
use crate::fallback::{self, NOT_FOUND_NOTICE};
use crate::message::Dispatcher;
use crate::request::{ActionRequest, MetadataFilter};

pub struct FilterProducts;

impl FilterProducts {
    async fn filter(&self, ctx: &ActionContext, req: &ActionRequest, out: &mut Dispatcher) -> Result<()> {
        let token = req.token();
        let mf = req.metadata_filter();
        let search = SearchRequest::first_page(
            SearchQuery::Structured(mf.filters.clone()),
            ctx.config.search.page_size,
        );
        let rows = ctx.catalog.search(&search, token).await?;
        if rows.is_empty() {
            fallback::after_empty_search(ctx, token, NOT_FOUND_NOTICE, out).await;
            return Ok(());
        }

        let caption = caption(ctx, &mf, rows.first(), token).await;
        out.cards(Some(format!("Kết quả lọc theo {caption}:")), watch_cards(rows));
        Ok(())
    }
}

/// Names come from the first result row; color and strap fall back to a
/// lookup by id; anything still unnamed is shown as `ID {id}`.
async fn caption(
    ctx: &ActionContext,
    mf: &MetadataFilter,
    first: Option<&WatchRecord>,
    token: Option<&str>,
) -> String {
    let f = &mf.filters;
    let from_row = |pick: fn(&WatchRecord) -> Option<&String>| {
        first.and_then(pick).filter(|s| !s.is_empty()).cloned()
    };
    let mut parts = Vec::new();

    if let Some(id) = &f.brand_id {
        let name = from_row(|w| w.brand_name.as_ref()).unwrap_or_else(|| format!("ID {id}"));
        parts.push(format!("thương hiệu {name}"));
    }
    if let Some(id) = &f.category_id {
        let name = from_row(|w| w.category_name.as_ref()).unwrap_or_else(|| format!("ID {id}"));
        parts.push(format!("danh mục {name}"));
    }
    if let Some(id) = &f.color_id {
        let name = match from_row(|w| w.color_name.as_ref()) {
            Some(n) => Some(n),
            None => ctx.resolver().name_by_id(LookupKind::Color, id, token).await,
        };
        parts.push(format!("màu sắc {}", name.unwrap_or_else(|| format!("ID {id}"))));
    }
    if let Some(id) = &f.movement_type_id {
        let name = from_row(|w| w.movement_type_name.as_ref()).unwrap_or_else(|| format!("ID {id}"));
        parts.push(format!("loại máy {name}"));
    }
    if let Some(id) = &f.strap_material_id {
        let name = match from_row(|w| w.strap_material_name.as_ref())
            .or_else(|| from_row(|w| w.material_name.as_ref()))
        {
            Some(n) => Some(n),
            None => ctx.resolver().name_by_id(LookupKind::StrapMaterial, id, token).await,
        };
        parts.push(format!("dây {}", name.unwrap_or_else(|| format!("ID {id}"))));
    }
    if let Some(g) = &f.gender {
        let word = match g.as_str() {
            "0" => "nam",
            "1" => "nữ",
            other => other,
        };
        parts.push(format!("giới tính {word}"));
    }
    // Only positive ratings are captioned on this path.
    if let Some(r) = mf.rating_min.filter(|r| *r > 0.0) {
        let shown = f.rating_gte.clone().unwrap_or_else(|| r.to_string());
        parts.push(format!("đánh giá từ {shown} sao"));
    }
    if let Some(p) = f.base_price_range.as_deref().and_then(price_param_caption) {
        parts.push(p);
    }

    join_caption(parts)
}

#[async_trait]
impl Action for FilterProducts {
    fn name(&self) -> &'static str {
        "action_filter_products"
    }

    async fn run(&self, ctx: &ActionContext, req: &ActionRequest, out: &mut Dispatcher) {
        if let Err(e) = self.filter(ctx, req, out).await {
            if e.is_network() {
                tracing::warn!(error = %e, "filter search unavailable, showing placeholder");
                fallback::placeholder(out, "Kết quả lọc sản phẩm:", filter_placeholder());
            } else {
                tracing::error!(error = %e, "filter failed");
                out.text("Có lỗi xảy ra khi lọc sản phẩm.");
            }
        }
    }
}
