//! # Article Store
//!
//! Core business state for apogee: the fetched article sequence and the
//! pagination cursor. One caller owns the store and shares it by reference
//! with whatever adapter renders it.
//!
//! ```text
//! ArticleStore
//! ├── source: Arc<dyn NewsSource>   // injected backend
//! ├── articles: Vec<Article>        // append-only, pages-received order
//! ├── page: usize                   // zero-based cursor, next batch to request
//! └── page_size: usize              // articles per fetch, default 10
//! ```
//!
//! `fetch_next_page` appends and advances; it never replaces, never
//! de-duplicates, and never retries. A failed fetch leaves the store exactly
//! as it was, so a caller that ignores the returned [`FetchOutcome`] observes
//! only "state did or did not change".

use std::sync::Arc;

use log::{debug, warn};

use crate::api::{ApiError, Article, NewsSource};
use crate::core::draft::ArticleDraft;

/// Articles requested per fetch when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub struct ArticleStore {
    source: Arc<dyn NewsSource>,
    /// Insertion order is pages-received order. Batches are appended as
    /// decoded; overlapping pages are kept as-is, not de-duplicated by id.
    pub articles: Vec<Article>,
    /// Zero-based index of the next batch to request. Display as `page + 1`.
    pub page: usize,
    pub page_size: usize,
}

impl ArticleStore {
    /// Creates an empty store reading from `source`.
    ///
    /// # Panics
    /// Panics if `page_size` is zero.
    pub fn new(source: Arc<dyn NewsSource>, page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be positive");
        Self {
            source,
            articles: Vec::new(),
            page: 0,
            page_size,
        }
    }

    /// Fetches the batch at the current cursor, appends it, and advances the
    /// cursor by one.
    ///
    /// On transport, status, or decode failure the store keeps its prior
    /// state: no retry, no partial append, no error state retained. The
    /// failure is logged and reported in the outcome for callers that want
    /// it. The exclusive borrow held across the await serializes calls per
    /// store, so the cursor/append relationship cannot be interleaved.
    pub async fn fetch_next_page(&mut self) -> FetchOutcome {
        match self.source.fetch_page(self.page, self.page_size).await {
            Ok(batch) => {
                let appended = batch.len();
                self.articles.extend(batch);
                self.page += 1;
                debug!("Appended {} article(s); cursor now at page {}", appended, self.page);
                FetchOutcome::Appended(appended)
            }
            Err(err) => {
                warn!(
                    "Fetch from {} failed, keeping prior state: {}",
                    self.source.name(),
                    err
                );
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Replaces the first stored article whose id matches, preserving its
    /// position. A no-op if no entry matches (not an error).
    pub fn update_article(&mut self, article: Article) {
        match self.articles.iter_mut().find(|a| a.id == article.id) {
            Some(slot) => *slot = article,
            None => debug!("update_article: no stored article with id {}", article.id),
        }
    }

    /// Clones the article with the given id into an editable draft, or
    /// `None` if the id is unknown. Dropping the draft discards the edit.
    pub fn begin_edit(&self, id: i64) -> Option<ArticleDraft> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .map(ArticleDraft::new)
    }

    /// Merges a draft back into the store by id.
    pub fn commit_edit(&mut self, draft: ArticleDraft) {
        self.update_article(draft.into_article());
    }

    /// Steps the cursor forward without fetching. Pairs with the "next page"
    /// control; the cursor and the held articles can diverge.
    pub fn advance_page(&mut self) {
        self.page += 1;
    }

    /// Steps the cursor back without fetching, saturating at zero. Keeping
    /// the control disabled at page zero is the presentation layer's job.
    pub fn rewind_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}

/// What a [`ArticleStore::fetch_next_page`] call did. Callers may ignore
/// this; failures are already logged and the store keeps its prior state.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The decoded batch was appended and the cursor advanced.
    Appended(usize),
    /// Transport, status, or decode failure; nothing changed.
    Failed(ApiError),
}
