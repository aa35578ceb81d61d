// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

use feed_types::FeedModel;

use crate::FeedServiceError;

/// Service-level permission to edit feeds
pub const FEEDS_EDIT: &str = "editFeeds";

/// Entity-level permission to edit a feed's general details
pub const EDIT_FEED_DETAILS: &str = "editFeedDetails";

#[async_trait]
pub trait PermissionService: Send + Sync {
    /// Whether the current user may perform `action` on `feed`, given the
    /// service-level `scope` permission
    async fn has_permission(
        &self,
        scope: &str,
        feed: &FeedModel,
        action: &str,
    ) -> Result<bool, FeedServiceError>;
}
