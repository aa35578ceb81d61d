// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

use feed_types::{FeedModel, SaveFeedResponse};

use crate::FeedServiceError;

#[async_trait]
pub trait FeedPersistence: Send + Sync {
    /// Persist `feed`. A refused save is reported as an error, never as an
    /// `Ok` response with `success == false`.
    async fn save_feed(&self, feed: &FeedModel) -> Result<SaveFeedResponse, FeedServiceError>;
}
