//! # Wire Layer
//!
//! Talks to the Spaceflight News API and defines the types that cross it.
//! The [`NewsSource`] trait is the seam between the article store and any
//! concrete backend; [`SpaceflightClient`] is the HTTP implementation.

pub mod client;
pub mod source;
pub mod types;

pub use client::{DEFAULT_BASE_URL, SpaceflightClient};
pub use source::{ApiError, NewsSource};
pub use types::Article;
