use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Filter extraction heuristics
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Tunables for the Vietnamese price heuristics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Half-width of the band built around "tầm/khoảng/cỡ X" prices.
    #[serde(default = "d_10")]
    pub approx_band_percent: u64,
    /// A bare number in this window followed by "mua", "đồng", ... is read
    /// as thousands of VND ("250 mua được" -> 250k).
    #[serde(default = "d_100")]
    pub bare_thousands_min: u64,
    #[serde(default = "d_9999")]
    pub bare_thousands_max: u64,
    /// How far from the start of the text a bare "có" still counts as
    /// price context.
    #[serde(default = "d_50")]
    pub price_context_chars: usize,
    /// Upper bound sent for open-ended ranges ("trên 5 triệu").
    #[serde(default = "d_ceiling")]
    pub unbounded_price_ceiling: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            approx_band_percent: 10,
            bare_thousands_min: 100,
            bare_thousands_max: 9999,
            price_context_chars: 50,
            unbounded_price_ceiling: 100_000_000,
        }
    }
}

fn d_10() -> u64 {
    10
}
fn d_100() -> u64 {
    100
}
fn d_9999() -> u64 {
    9999
}
fn d_50() -> usize {
    50
}
fn d_ceiling() -> u64 {
    100_000_000
}
