// SPDX-License-Identifier: GPL-3.0-only

use feed_contracts::FeedServiceError;
use feed_types::{SaveContext, SaveFeedResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum FeedDefinitionMessage {
    PermissionResolved(bool),
    Edit,
    NameUpdate(String),
    SystemNameUpdate(String),
    DescriptionUpdate(String),
    TemplateUpdate(String),
    AllowIndexingUpdate(bool),
    Cancel,
    Save(SaveContext),
    SaveComplete(Result<SaveFeedResponse, FeedServiceError>),
}
