//! Transient edit copies for the detail flow.
//!
//! A detail view edits a copy, not the canonical list: `begin_edit` clones,
//! [`ArticleDraft::toggle_favorited`] mutates the copy, `commit_edit` merges
//! it back by id. Dropping a draft discards the edit.

use crate::api::Article;

/// An article copy being edited outside the store.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    article: Article,
}

impl ArticleDraft {
    pub(crate) fn new(article: Article) -> Self {
        Self { article }
    }

    /// Read access for rendering the detail view.
    pub fn article(&self) -> &Article {
        &self.article
    }

    /// Flips the favorite flag on the copy. The store is untouched until
    /// the draft is committed.
    pub fn toggle_favorited(&mut self) {
        self.article.is_favorited = !self.article.is_favorited;
    }

    pub fn into_article(self) -> Article {
        self.article
    }
}
