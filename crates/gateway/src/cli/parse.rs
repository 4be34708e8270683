//! `watch-actions parse`: show what the text scanners make of an utterance.
//!
//! Runs only the offline half of the search pipeline, so it works without
//! a reachable catalog. Entity names (brands, colors, ...) are not resolved.

use wa_domain::config::Config;
use wa_extract::{ExtractedSignals, Extractor};

pub fn run(config: &Config, text: &str) -> anyhow::Result<()> {
    let signals = extract(config, text)?;
    println!("{}", serde_json::to_string_pretty(&signals)?);
    Ok(())
}

fn extract(config: &Config, text: &str) -> anyhow::Result<ExtractedSignals> {
    let extractor = Extractor::new(&config.extraction)?;
    Ok(extractor.extract(text))
}
