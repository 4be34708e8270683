pub mod config;
pub mod doctor;
pub mod parse;
pub mod run;

use clap::{Parser, Subcommand};

use wa_domain::config::Config;

/// watch-actions: dialogue actions for the watch shop chatbot.
#[derive(Debug, Parser)]
#[command(name = "watch-actions", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the action server (default when no subcommand is given).
    Serve,
    /// Run diagnostic checks against the current configuration.
    Doctor,
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print the signals extracted from an utterance as JSON (no network).
    Parse {
        /// The shopper's utterance.
        text: String,
    },
    /// Run one action against the configured catalog and print its responses.
    Run {
        /// Action name, e.g. `action_search_products`.
        action: String,
        /// Latest user message.
        #[arg(long, default_value = "")]
        text: String,
        /// Bearer token forwarded to account-scoped endpoints.
        #[arg(long)]
        token: Option<String>,
        /// Button metadata as a JSON object, e.g. '{"brand_id": 3}'.
        #[arg(long)]
        metadata: Option<String>,
    },
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `WA_CONFIG` (or
/// `config.toml` by default), then apply the `API_URL` override.
///
/// Returns the parsed [`Config`] and the path that was used.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    let config_path = std::env::var("WA_CONFIG").unwrap_or_else(|_| "config.toml".into());
    let api_url = std::env::var("API_URL").ok();
    let config = load_config_from(&config_path, api_url.as_deref())?;
    Ok((config, config_path))
}

/// File-and-override half of [`load_config`]; a missing file means defaults.
pub fn load_config_from(config_path: &str, api_url: Option<&str>) -> anyhow::Result<Config> {
    let mut config: Config = if std::path::Path::new(config_path).exists() {
        let raw = std::fs::read_to_string(config_path)
            .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
        toml::from_str(&raw).map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))?
    } else {
        Config::default()
    };

    if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
        config.catalog.base_url = url.trim_end_matches('/').to_owned();
    }

    Ok(config)
}
