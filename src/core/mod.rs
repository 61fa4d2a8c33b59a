//! # Core Application Logic
//!
//! This module contains apogee's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ArticleStore (state) │
//!                    │  • ArticleDraft (edits) │
//!                    │  • Config (settings)    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │    TUI     │      │   (other)  │
//!     │  Adapter   │      │  (future)  │      │  adapters  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! Adapters call store operations, read the published state, and re-render.
//! The store never pushes; data flows one way, store → render.
//!
//! ## Modules
//!
//! - [`store`]: The `ArticleStore` struct — fetched articles and the pagination cursor
//! - [`draft`]: The `ArticleDraft` copy/commit/discard edit flow
//! - [`config`]: Settings with a defaults → file → env → CLI hierarchy

pub mod config;
pub mod draft;
pub mod store;
