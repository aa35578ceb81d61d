// SPDX-License-Identifier: GPL-3.0-only

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use feed_types::FeedModel;

/// Handle to the feed being edited.
///
/// The page that loaded the feed owns it; panels hold a clone of the handle,
/// read through `snapshot`/`with` and commit through `update`.
#[derive(Debug, Clone, Default)]
pub struct SharedFeed {
    inner: Arc<RwLock<FeedModel>>,
}

impl SharedFeed {
    pub fn new(feed: FeedModel) -> Self {
        Self {
            inner: Arc::new(RwLock::new(feed)),
        }
    }

    /// An owned copy of the current feed
    pub fn snapshot(&self) -> FeedModel {
        self.read().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&FeedModel) -> R) -> R {
        f(&self.read())
    }

    /// Commit a change to the feed
    pub fn update<R>(&self, f: impl FnOnce(&mut FeedModel) -> R) -> R {
        f(&mut self.write())
    }

    pub fn display_name(&self) -> String {
        self.with(|feed| feed.display_name().to_string())
    }

    // A panic while holding the lock leaves the feed as last written.
    fn read(&self) -> RwLockReadGuard<'_, FeedModel> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, FeedModel> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}
