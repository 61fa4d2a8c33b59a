//! Wire types for the Spaceflight News articles endpoint.
//!
//! The API returns a JSON array of article objects with camelCase field
//! names and an ISO-8601 `publishedAt` timestamp. The favorite flag is
//! local state only and never crosses the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One news item with metadata and a local favorite flag.
///
/// Identified by `id` (unique, stable, assigned by the remote API).
/// Equality is full-field comparison.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    /// External link to the original story.
    pub url: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "newsSite")]
    pub news_site: String,
    pub summary: String,
    #[serde(rename = "publishedAt")]
    pub publication_date: DateTime<Utc>,
    /// Local-only. Absent from the wire format; defaults to false on decode.
    #[serde(skip)]
    pub is_favorited: bool,
}
