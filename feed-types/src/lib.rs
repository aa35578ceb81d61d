// SPDX-License-Identifier: GPL-3.0-only

//! Canonical domain models for the feed definition editor
//!
//! This crate defines the single source of truth for the feed types shared
//! across the stack:
//!
//! - **feed-contracts**: Serializes/deserializes these types for the feed manager REST API
//! - **feed-editor**: Consumes these types, snapshotting the editable subset into a draft
//!
//! ## Editing model
//!
//! - `FeedModel` → the full feed document as owned by the feed manager
//! - `FeedDraft` → the five editable fields, copied out of a `FeedModel` while editing
//! - `SaveFeedResponse` → what the feed manager answers to a save
//!
//! A draft only flows back into a `FeedModel` once the feed manager has
//! confirmed the save.

pub mod access;
pub mod context;
pub mod draft;
pub mod feed;
pub mod response;

mod serde_util;

pub use access::{Action, AllowedActions};
pub use context::SaveContext;
pub use draft::FeedDraft;
pub use feed::{FeedModel, FeedView, SectionView, UserProperty};
pub use response::SaveFeedResponse;
