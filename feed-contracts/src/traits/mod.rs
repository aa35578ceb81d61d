// SPDX-License-Identifier: GPL-3.0-only

pub mod localization;
pub mod permission;
pub mod persistence;
pub mod presentation;

pub use localization::Translate;
pub use permission::{EDIT_FEED_DETAILS, FEEDS_EDIT, PermissionService};
pub use persistence::FeedPersistence;
pub use presentation::FeedPresenter;
