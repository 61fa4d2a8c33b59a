//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::api::{ApiError, Article, NewsSource};

/// Builds an article fixture with recognizable field values.
pub fn sample_article(id: i64) -> Article {
    Article {
        id,
        title: format!("Test News {id}"),
        url: "https://www.space.com/venus-active-volcano-nasa-magellan-mission".to_string(),
        image_url: "https://cdn.mos.cms.futurecdn.net/YWpKWSwaC3d3ZwaxaFHBqV-1920-80.jpeg.webp"
            .to_string(),
        news_site: "Space.com".to_string(),
        summary: "Maat Mons is displayed in this computer generated three-dimensional \
                  perspective of the surface of Venus."
            .to_string(),
        publication_date: Utc.with_ymd_and_hms(2023, 3, 16, 0, 0, 0).unwrap(),
        is_favorited: false,
    }
}

/// A `NewsSource` that replays a scripted sequence of page results.
/// Once the script runs out it serves empty pages.
pub struct ScriptedSource {
    pages: Mutex<VecDeque<Result<Vec<Article>, ApiError>>>,
}

impl ScriptedSource {
    pub fn new(pages: Vec<Result<Vec<Article>, ApiError>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
        }
    }
}

#[async_trait]
impl NewsSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_page(&self, _page: usize, _limit: usize) -> Result<Vec<Article>, ApiError> {
        self.pages
            .lock()
            .expect("scripted source mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
