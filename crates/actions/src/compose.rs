//! Filter composition: decides how a free-text turn is searched and builds
//! the structured query plus its human caption.

use wa_catalog::{LookupKind, StructuredFilters};
use wa_domain::config::ExtractionConfig;
use wa_domain::trace::TraceEvent;
use wa_extract::ExtractedSignals;

use crate::resolver::ResolvedEntities;

/// Generic search term used when the utterance itself is not a useful `q`.
pub const GENERIC_TERM: &str = "đồng hồ";

/// How a text turn is answered. Evaluated once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    Structured {
        filters: StructuredFilters,
        caption: String,
    },
    /// No structured signal but a "cheap/best/hot" style phrase.
    VagueRecommend,
    FreeText { term: String },
}

impl SearchPlan {
    pub fn mode(&self) -> &'static str {
        match self {
            SearchPlan::Structured { .. } => "structured",
            SearchPlan::VagueRecommend => "vague_recommend",
            SearchPlan::FreeText { .. } => "free_text",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterComposer {
    price_ceiling: u64,
}

impl FilterComposer {
    pub fn new(cfg: &ExtractionConfig) -> Self {
        Self {
            price_ceiling: cfg.unbounded_price_ceiling,
        }
    }

    pub fn plan(&self, signals: &ExtractedSignals, entities: &ResolvedEntities) -> SearchPlan {
        let plan = if entities.any_resolved() || signals.has_structured_signal() {
            SearchPlan::Structured {
                filters: self.filters(signals, entities),
                caption: text_caption(signals, entities),
            }
        } else if signals.vague {
            SearchPlan::VagueRecommend
        } else {
            SearchPlan::FreeText {
                term: free_text_term(&signals.text, false),
            }
        };

        let params = match &plan {
            SearchPlan::Structured { filters, .. } => filters.pairs().len(),
            SearchPlan::VagueRecommend => 0,
            SearchPlan::FreeText { .. } => 1,
        };
        TraceEvent::SearchPlanned {
            mode: plan.mode().to_owned(),
            params,
        }
        .emit();

        plan
    }

    /// Wire values for every signal that was found. Style words are caption
    /// only.
    pub fn filters(&self, signals: &ExtractedSignals, entities: &ResolvedEntities) -> StructuredFilters {
        let id = |kind| entities.get(kind).map(|e| e.id.to_string());
        StructuredFilters {
            brand_id: id(LookupKind::Brand),
            category_id: id(LookupKind::Category),
            color_id: id(LookupKind::Color),
            movement_type_id: id(LookupKind::MovementType),
            strap_material_id: id(LookupKind::StrapMaterial),
            gender: signals.gender.map(|g| g.code().to_owned()),
            rating_gte: signals.rating.map(|r| r.to_string()),
            base_price_range: signals.price.map(|p| p.to_param(self.price_ceiling)),
        }
    }
}

/// `q` for a free-text search: the trimmed utterance, or the generic term
/// when the utterance is empty, already names the product, or was a vague
/// query whose recommendations came back empty.
pub fn free_text_term(text: &str, vague_fell_through: bool) -> String {
    let trimmed = text.trim();
    if vague_fell_through || trimmed.is_empty() || trimmed.contains(GENERIC_TERM) {
        GENERIC_TERM.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Caption for the text path. Part order is fixed.
pub fn text_caption(signals: &ExtractedSignals, entities: &ResolvedEntities) -> String {
    let mut parts: Vec<String> = Vec::new();
    let labelled = [
        (LookupKind::Brand, "thương hiệu"),
        (LookupKind::Category, "danh mục"),
        (LookupKind::Color, "màu"),
        (LookupKind::MovementType, "loại máy"),
        (LookupKind::StrapMaterial, "dây"),
    ];
    for (kind, label) in labelled {
        if let Some(e) = entities.get(kind).filter(|e| !e.name.is_empty()) {
            parts.push(format!("{label} {}", e.name));
        }
    }
    if let Some(g) = signals.gender {
        parts.push(g.label().to_owned());
    }
    if !signals.styles.is_empty() {
        parts.push(signals.styles.join(", "));
    }
    match signals.rating {
        Some(0) => parts.push("chưa đánh giá".into()),
        Some(n) => parts.push(format!("đánh giá từ {n} sao")),
        None => {}
    }
    if let Some(p) = signals.price {
        parts.push(price_caption(p.min, p.max));
    }
    join_caption(parts)
}

/// `a, b, c` or `bộ lọc` when nothing was captioned.
pub fn join_caption(parts: Vec<String>) -> String {
    if parts.is_empty() {
        "bộ lọc".into()
    } else {
        parts.join(", ")
    }
}

/// Thousands (`k`) below one million, whole millions (`triệu`) otherwise.
pub fn price_caption(min: u64, max: Option<u64>) -> String {
    const MILLION: u64 = 1_000_000;
    match max {
        Some(max) if min == 0 => {
            if max < MILLION {
                format!("dưới {}k", max / 1000)
            } else {
                format!("dưới {} triệu", max / MILLION)
            }
        }
        Some(max) => {
            if max < MILLION {
                format!("giá từ {}k đến {}k", min / 1000, max / 1000)
            } else {
                format!("giá từ {} triệu đến {} triệu", min / MILLION, max / MILLION)
            }
        }
        None => format!("trên {} triệu", min / MILLION),
    }
}

/// Caption part for a raw `min:max` metadata value. `None` when the value
/// has no `:`; `giá {raw}` when either side is not a number.
pub fn price_param_caption(raw: &str) -> Option<String> {
    let (lo, hi) = raw.split_once(':')?;
    let min = lo.trim().parse::<u64>();
    let max = if hi.trim().is_empty() {
        Ok(None)
    } else {
        hi.trim().parse::<u64>().map(Some)
    };
    Some(match (min, max) {
        (Ok(min), Ok(max)) => price_caption(min, max),
        _ => format!("giá {raw}"),
    })
}
