//! `wa-extract`: turns a Vietnamese shopping utterance into filter signals.
//!
//! Everything here is pure and synchronous: price and rating parsing,
//! gender/style/vague keyword scans, and matching reference-list names
//! against the text. Fetching the lists is the caller's job.

pub mod matching;
pub mod price;
pub mod rating;
pub mod tokens;

pub use price::{PriceParser, PriceRange};
pub use rating::RatingParser;
pub use tokens::Gender;

use serde::Serialize;
use wa_domain::config::ExtractionConfig;
use wa_domain::error::{Error, Result};
use wa_domain::trace::TraceEvent;

/// Why an entity type ended up without a filter value.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup list unavailable: {0}")]
    Fetch(#[source] Error),
    #[error("no item matched")]
    NoMatch,
}

/// Everything the text scanners found, before any catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedSignals {
    /// Lower-cased utterance the scanners ran on.
    pub text: String,
    pub price: Option<PriceRange>,
    pub rating: Option<u8>,
    pub gender: Option<Gender>,
    pub styles: Vec<&'static str>,
    pub vague: bool,
}

impl ExtractedSignals {
    /// True when any text-only signal would narrow a structured search.
    pub fn has_structured_signal(&self) -> bool {
        self.price.is_some()
            || self.rating.is_some()
            || self.gender.is_some()
            || !self.styles.is_empty()
    }
}

/// Compiled once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct Extractor {
    price: PriceParser,
    rating: RatingParser,
}

impl Extractor {
    pub fn new(cfg: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            price: PriceParser::new(cfg)?,
            rating: RatingParser::new()?,
        })
    }

    pub fn parse_price(&self, text: &str) -> Option<PriceRange> {
        self.price.parse(&text.to_lowercase())
    }

    pub fn parse_rating(&self, text: &str) -> Option<u8> {
        self.rating.parse(&text.to_lowercase())
    }

    /// Run every text scanner over `utterance`.
    pub fn extract(&self, utterance: &str) -> ExtractedSignals {
        let text = utterance.to_lowercase();
        let signals = ExtractedSignals {
            price: self.price.parse(&text),
            rating: self.rating.parse(&text),
            gender: tokens::detect_gender(&text),
            styles: tokens::style_tokens(&text),
            vague: tokens::is_vague(&text),
            text,
        };

        TraceEvent::SignalsExtracted {
            price_min: signals.price.map(|p| p.min),
            price_max: signals.price.and_then(|p| p.max),
            rating: signals.rating,
            gender: signals.gender.map(|g| g.code().to_owned()),
            styles: signals.styles.len(),
            vague: signals.vague,
        }
        .emit();

        signals
    }
}
