/// Shared error type used across all watch-actions crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP: {0}")]
    Http(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("{endpoint} returned {status}")]
    Upstream { endpoint: String, status: u16 },

    #[error("auth: {0}")]
    Auth(String),

    /// The response body is not JSON at all (HTML error page, truncated read).
    #[error("malformed body: {0}")]
    Body(String),

    #[error("decode: {0}")]
    Decode(String),

    #[error("config: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Connection failures, timeouts, non-2xx answers and bodies that are not
    /// JSON.
    ///
    /// Actions answer these with placeholder content; everything else gets
    /// the generic apology.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::Timeout(_)
                | Error::Upstream { .. }
                | Error::Auth(_)
                | Error::Body(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
