use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Search / recommendation batch sizes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// `limit` sent with every `/v1/search` call (always `page=1`).
    #[serde(default = "d_12")]
    pub page_size: u32,
    /// Recommendations requested when a vague query ("giá rẻ") is detected.
    #[serde(default = "d_12")]
    pub vague_recommend_limit: u32,
    /// Recommendations offered after a search came back empty.
    #[serde(default = "d_5")]
    pub fallback_recommend_limit: u32,
    /// Batch size of the "popular watches" action.
    #[serde(default = "d_5")]
    pub popular_limit: u32,
    /// Orders listed by the order-status action.
    #[serde(default = "d_5")]
    pub orders_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            vague_recommend_limit: 12,
            fallback_recommend_limit: 5,
            popular_limit: 5,
            orders_limit: 5,
        }
    }
}

fn d_12() -> u32 {
    12
}
fn d_5() -> u32 {
    5
}
