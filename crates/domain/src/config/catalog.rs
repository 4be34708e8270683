use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Catalog API connection
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Where the shop's product/order API lives and how long to wait for it.
///
/// The gateway applies the `API_URL` environment override before the value
/// reaches any component; nothing below the binary reads the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "d_catalog_url")]
    pub base_url: String,
    /// Applies to every outbound call. A timeout is handled exactly like a
    /// refused connection.
    #[serde(default = "d_10000")]
    pub timeout_ms: u64,
    /// Sent as `X-Client-Type` on every request.
    #[serde(default = "d_client_type")]
    pub client_type: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: d_catalog_url(),
            timeout_ms: 10_000,
            client_type: d_client_type(),
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_catalog_url() -> String {
    "http://localhost:8000".into()
}
fn d_10000() -> u64 {
    10_000
}
fn d_client_type() -> String {
    "watch-actions".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_other_defaults() {
        let cfg: CatalogConfig = toml::from_str(r#"base_url = "https://shop.example""#).unwrap();
        assert_eq!(cfg.base_url, "https://shop.example");
        assert_eq!(cfg.timeout_ms, 10_000);
        assert_eq!(cfg.client_type, "watch-actions");
    }
}
