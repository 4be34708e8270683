//! Vietnamese price phrases -> VND interval.
//!
//! Layered patterns, first match wins:
//!
//! | # | Phrase                               | Result            |
//! |---|--------------------------------------|-------------------|
//! | 1 | `từ A đến B` (also `khoảng từ ...`)  | `(A, B)`          |
//! | 2 | `dưới A`                             | `(0, A)`          |
//! | 3 | `trên A`, `từ A [trở lên]`           | `(A, None)`       |
//! | 4 | `tầm/khoảng/cỡ/còn có A`             | `A ± band%`       |
//! | 5 | `A` with a unit, in a price context  | `(0, A)`          |
//! | 6 | bare `250 mua`, `500 được`, ...      | `(0, A * 1000)`   |

use regex::{Captures, Regex};
use serde::Serialize;

use wa_domain::config::ExtractionConfig;
use wa_domain::error::{Error, Result};

/// Number followed by an optional unit. Groups: digits, unit.
const AMOUNT: &str = r"(\d+)\s*(triệu|tr|nghìn|k)?\b";

const RATING_VOCAB: [&str; 3] = ["sao", "rating", "đánh giá"];
const PRICE_VOCAB: [&str; 5] = ["giá", "triệu", "nghìn", "mua", "còn có"];

/// `min` VND up to `max` VND; `max = None` is unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    pub fn new(min: u64, max: Option<u64>) -> Self {
        Self { min, max }
    }

    /// `base_price__range` value. Unbounded ranges are capped at `ceiling`.
    pub fn to_param(&self, ceiling: u64) -> String {
        format!("{}:{}", self.min, self.max.unwrap_or(ceiling))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Vnd,
    Thousand,
    Million,
}

impl Unit {
    fn parse(s: Option<&str>) -> Self {
        match s {
            Some("k") | Some("nghìn") => Unit::Thousand,
            Some("tr") | Some("triệu") => Unit::Million,
            _ => Unit::Vnd,
        }
    }

    fn multiplier(self) -> u64 {
        match self {
            Unit::Vnd => 1,
            Unit::Thousand => 1_000,
            Unit::Million => 1_000_000,
        }
    }
}

/// Compiled price patterns plus the tunables from `[extraction]`.
#[derive(Debug, Clone)]
pub struct PriceParser {
    range: Regex,
    below: Regex,
    above: Regex,
    approx: Regex,
    unit_tagged: Regex,
    bare_thousands: Regex,
    bare_k: Regex,
    band_percent: u64,
    thousands_min: u64,
    thousands_max: u64,
    context_chars: usize,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Config(format!("price pattern {pattern:?}: {e}")))
}

impl PriceParser {
    pub fn new(cfg: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            range: compile(&format!(
                r"(?:trong khoảng |khoảng )?từ\s+{AMOUNT}\s+đến\s+{AMOUNT}"
            ))?,
            below: compile(&format!(r"dưới\s+{AMOUNT}"))?,
            above: compile(&format!(r"(?:trên|từ)\s+{AMOUNT}(?:\s+trở lên)?"))?,
            approx: compile(&format!(r"(?:tầm|khoảng|cỡ|còn có)\s+{AMOUNT}"))?,
            unit_tagged: compile(r"\b(\d+)\s*(triệu|tr|nghìn|k)\b")?,
            bare_thousands: compile(r"\b(\d{2,4})\s+(?:mua|đồng|k|triệu|nghìn|được)")?,
            bare_k: compile(r"(?:^|[\d\s])k\b")?,
            band_percent: cfg.approx_band_percent,
            thousands_min: cfg.bare_thousands_min,
            thousands_max: cfg.bare_thousands_max,
            context_chars: cfg.price_context_chars,
        })
    }

    /// Extract a price interval from already lower-cased text.
    pub fn parse(&self, text: &str) -> Option<PriceRange> {
        let has_rating = RATING_VOCAB.iter().any(|kw| text.contains(kw));
        let has_price =
            PRICE_VOCAB.iter().any(|kw| text.contains(kw)) || self.bare_k.is_match(text);
        if has_rating && !has_price {
            return None;
        }

        let text = text.replace(['.', ','], "");
        let text = text.as_str();

        if let Some(r) = self.first_valid(&self.range, text, |c| {
            Some(PriceRange::new(amount(c, 1, 2)?, Some(amount(c, 3, 4)?)))
        }) {
            return Some(r);
        }

        if let Some(r) = self.first_valid(&self.below, text, |c| {
            Some(PriceRange::new(0, Some(amount(c, 1, 2)?)))
        }) {
            return Some(r);
        }

        if let Some(r) = self.first_valid(&self.above, text, |c| {
            Some(PriceRange::new(amount(c, 1, 2)?, None))
        }) {
            return Some(r);
        }

        if let Some(r) = self.first_valid(&self.approx, text, |c| {
            let a = amount(c, 1, 2)?;
            Some(PriceRange::new(
                scale(a, 100u64.saturating_sub(self.band_percent))?,
                Some(scale(a, 100 + self.band_percent)?),
            ))
        }) {
            return Some(r);
        }

        if self.has_price_context(text) {
            if let Some(c) = self.unit_tagged.captures(text) {
                if let Some(a) = amount(&c, 1, 2) {
                    return Some(PriceRange::new(0, Some(a)));
                }
            }
        }

        if let Some(c) = self.bare_thousands.captures(text) {
            let n: u64 = c.get(1)?.as_str().parse().ok()?;
            if (self.thousands_min..=self.thousands_max).contains(&n) {
                return Some(PriceRange::new(0, Some(n * 1_000)));
            }
        }

        None
    }

    /// First match of `re` that converts to a range and is not a star count
    /// (`từ 4 sao` is a rating, not a price).
    fn first_valid(
        &self,
        re: &Regex,
        text: &str,
        convert: impl Fn(&Captures<'_>) -> Option<PriceRange>,
    ) -> Option<PriceRange> {
        re.captures_iter(text).find_map(|c| {
            let end = c.get(0)?.end();
            if text[end..].trim_start().starts_with("sao") {
                return None;
            }
            convert(&c)
        })
    }

    fn has_price_context(&self, text: &str) -> bool {
        let head: String = text.chars().take(self.context_chars).collect();
        text.contains("giá") || text.contains("còn có") || head.contains("có") || text.contains("mua")
    }
}

/// Digits in group `num`, unit in group `unit`, as VND.
fn amount(c: &Captures<'_>, num: usize, unit: usize) -> Option<u64> {
    let n: u64 = c.get(num)?.as_str().parse().ok()?;
    n.checked_mul(Unit::parse(c.get(unit).map(|m| m.as_str())).multiplier())
}

/// `a * percent / 100`, rounded half up.
fn scale(a: u64, percent: u64) -> Option<u64> {
    let v = (a as u128 * percent as u128 + 50) / 100;
    u64::try_from(v).ok()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
