// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::sync::Arc;

use feed_contracts::{FeedPersistence, FeedPresenter, PermissionService, Translate};

/// Collaborators a feed editing panel talks to
#[derive(Clone)]
pub struct FeedServices {
    pub permissions: Arc<dyn PermissionService>,
    pub persistence: Arc<dyn FeedPersistence>,
    pub presenter: Arc<dyn FeedPresenter>,
    pub translator: Arc<dyn Translate>,
}

impl fmt::Debug for FeedServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedServices").finish_non_exhaustive()
    }
}
