//! HTTP implementation of [`NewsSource`] for the Spaceflight News API.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{ApiError, NewsSource};
use super::types::Article;

/// Articles endpoint of the public Spaceflight News API.
pub const DEFAULT_BASE_URL: &str = "https://api.spaceflightnewsapi.net/v3/articles";

/// Reqwest-backed client for the paginated articles endpoint.
pub struct SpaceflightClient {
    base_url: String,
    client: reqwest::Client,
}

impl SpaceflightClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom endpoint (defaults to the public API)
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    /// Composes the request URL for one page:
    /// `<base>?_limit=<limit>&_start=<limit * page>`.
    pub fn page_url(&self, page: usize, limit: usize) -> String {
        format!("{}?_limit={}&_start={}", self.base_url, limit, limit * page)
    }
}

#[async_trait]
impl NewsSource for SpaceflightClient {
    fn name(&self) -> &str {
        "spaceflight-news"
    }

    async fn fetch_page(&self, page: usize, limit: usize) -> Result<Vec<Article>, ApiError> {
        let url = reqwest::Url::parse(&self.page_url(page, limit))
            .map_err(|e| ApiError::Url(e.to_string()))?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Articles response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Articles API error: {} - {}", status, message);
            return Err(ApiError::Api { status, message });
        }

        let articles: Vec<Article> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        info!("Fetched {} article(s) for page {}", articles.len(), page);
        Ok(articles)
    }
}
