use std::fmt;

use async_trait::async_trait;

use super::types::Article;

/// Errors that can occur while fetching a page of articles.
/// Variants follow the failure taxonomy of the fetch contract.
#[derive(Debug)]
pub enum ApiError {
    /// The composed request URL failed to parse. Guarded even though the
    /// base endpoint is a startup-time constant.
    Url(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The API returned a non-success status.
    Api { status: u16, message: String },
    /// The response body was not a decodable article array.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Url(msg) => write!(f, "URL error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// A backend that can produce one page of articles at a time.
///
/// `SpaceflightClient` is the HTTP implementation; tests substitute a
/// scripted source so store behavior can be exercised without a server.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the source (used in log lines).
    fn name(&self) -> &str;

    /// Fetches one page: `limit` articles starting at offset `limit * page`.
    async fn fetch_page(&self, page: usize, limit: usize) -> Result<Vec<Article>, ApiError>;
}
