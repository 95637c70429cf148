//! Owner fetch error type.

use thiserror::Error;

/// Why an owner read failed. All variants mean the same thing to the
/// controller ("fetch failed"); the split is kept for log output.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Base URL or joined request URL could not be parsed.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Curl reported an error (timeout, connection refused, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Response body was not JSON.
    #[error("malformed owner body: {0}")]
    Body(#[from] serde_json::Error),
    /// The blocking fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Task(String),
}
