//! `/v1/search` query model.
//!
//! A search is either structured (id/gender/rating/price filters) or a
//! free-text `q` lookup, never both. [`SearchQuery`] makes the mix
//! unrepresentable.

use serde::Serialize;

/// Structured filter values, already rendered to their wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredFilters {
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub color_id: Option<String>,
    pub movement_type_id: Option<String>,
    pub strap_material_id: Option<String>,
    /// `"0"` = male, `"1"` = female; metadata may carry other raw values.
    pub gender: Option<String>,
    pub rating_gte: Option<String>,
    /// `"{min}:{max}"`.
    pub base_price_range: Option<String>,
}

impl StructuredFilters {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let fields = [
            ("brand_id__in", &self.brand_id),
            ("category_id__in", &self.category_id),
            ("color_id__in", &self.color_id),
            ("movement_type_id__in", &self.movement_type_id),
            ("strap_material_id__in", &self.strap_material_id),
            ("gender__in", &self.gender),
            ("rating__gte", &self.rating_gte),
            ("base_price__range", &self.base_price_range),
        ];
        fields
            .into_iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k, v.clone())))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchQuery {
    Structured(StructuredFilters),
    FreeText { term: String },
}

/// A full `/v1/search` request: the query plus pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub page: u32,
    pub limit: u32,
}

impl SearchRequest {
    /// First page of `limit` results.
    pub fn first_page(query: SearchQuery, limit: u32) -> Self {
        Self {
            query,
            page: 1,
            limit,
        }
    }

    /// Query-string pairs in a stable order: pagination first.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        match &self.query {
            SearchQuery::Structured(f) => pairs.extend(f.pairs()),
            SearchQuery::FreeText { term } => pairs.push(("q", term.clone())),
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_query_never_carries_q() {
        let req = SearchRequest::first_page(
            SearchQuery::Structured(StructuredFilters {
                category_id: Some("5".into()),
                rating_gte: Some("4".into()),
                base_price_range: Some("0:1000000".into()),
                ..Default::default()
            }),
            12,
        );
        let pairs = req.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("limit", "12".to_string()),
                ("category_id__in", "5".to_string()),
                ("rating__gte", "4".to_string()),
                ("base_price__range", "0:1000000".to_string()),
            ]
        );
        assert!(pairs.iter().all(|(k, _)| *k != "q"));
    }

    #[test]
    fn free_text_query_carries_only_q() {
        let req = SearchRequest::first_page(
            SearchQuery::FreeText {
                term: "đồng hồ".into(),
            },
            12,
        );
        let pairs = req.to_query_pairs();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], ("q", "đồng hồ".to_string()));
    }
}
