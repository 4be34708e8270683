use regex::Regex;

use wa_domain::error::{Error, Result};

/// Minimum star rating from text: `4 sao`, `từ 0 sao trở lên`,
/// `đánh giá từ 3`, `rating 5`.
///
/// `0` is a real answer ("unrated allowed"), distinct from `None`.
#[derive(Debug, Clone)]
pub struct RatingParser {
    stars: Regex,
    keyword: Regex,
}

impl RatingParser {
    pub fn new() -> Result<Self> {
        let compile = |p: &str| {
            Regex::new(p).map_err(|e| Error::Config(format!("rating pattern {p:?}: {e}")))
        };
        Ok(Self {
            stars: compile(r"(?:từ\s+)?\b(\d+)\s*sao\b")?,
            keyword: compile(r"(?:rating|đánh giá)(?:\s+từ)?\s+(\d+)\b")?,
        })
    }

    /// Each pattern is tried once; an out-of-range value falls through to
    /// the next pattern.
    pub fn parse(&self, text: &str) -> Option<u8> {
        [&self.stars, &self.keyword]
            .into_iter()
            .find_map(|re| re.captures(text).and_then(|c| in_range(c.get(1)?.as_str())))
    }
}

fn in_range(digits: &str) -> Option<u8> {
    digits.parse::<u8>().ok().filter(|r| *r <= 5)
}
