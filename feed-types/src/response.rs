// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

use crate::feed::FeedModel;
use crate::serde_util::null_as_default;

fn default_success() -> bool {
    true
}

/// The feed manager's answer to a save request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFeedResponse {
    /// The server may answer 200 and still refuse the save
    #[serde(default = "default_success")]
    pub success: bool,

    /// The feed as stored by the server
    #[serde(default)]
    pub feed_metadata: Option<FeedModel>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub error_messages: Vec<String>,
}

impl SaveFeedResponse {
    /// Reindexing status as recorded by the server after the save
    pub fn history_reindexing_status(&self) -> Option<&str> {
        self.feed_metadata
            .as_ref()
            .and_then(|feed| feed.history_reindexing_status.as_deref())
    }
}
