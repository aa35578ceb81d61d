// SPDX-License-Identifier: GPL-3.0-only

pub mod client;
pub mod protocol;
pub mod traits;

pub use protocol::{FeedServiceError, FeedServiceErrorKind};
pub use traits::{
    EDIT_FEED_DETAILS, FEEDS_EDIT, FeedPersistence, FeedPresenter, PermissionService, Translate,
};
