// SPDX-License-Identifier: GPL-3.0-only

//! The feed document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::access::AllowedActions;
use crate::draft::FeedDraft;
use crate::serde_util::null_as_default;

/// A feed as held by the feed manager.
///
/// Only the fields the definition panel reads or writes are modelled;
/// everything else in the server document is kept in `extra` so a load/save
/// round trip does not drop it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub feed_name: String,

    /// Immutable system identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub system_feed_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub template_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub allow_indexing: bool,

    /// Owned by the server; never sent back on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_reindexing_status: Option<String>,

    /// Serialized as an explicit `null` when cleared.
    #[serde(default)]
    pub user_properties: Option<Vec<UserProperty>>,

    /// Left out of the wire document when the server never sent one
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "FeedView::is_empty"
    )]
    pub view: FeedView,

    /// Entity-level permissions granted to the current user, when entity
    /// access control is enabled on the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_actions: Option<AllowedActions>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeedModel {
    /// Name shown to the user in dialogs and titles
    pub fn display_name(&self) -> &str {
        &self.feed_name
    }

    /// Whether the general info section has been locked for editing
    pub fn is_disabled(&self) -> bool {
        self.view.general_info.disabled
    }

    /// Build the document to send on save: a copy of this feed with the
    /// draft's fields applied, user properties nulled, and the reindexing
    /// status cleared so the server's value is never overwritten.
    pub fn save_payload(&self, draft: &FeedDraft) -> FeedModel {
        let mut payload = self.clone();
        draft.apply_to(&mut payload);
        payload.user_properties = None;
        payload.history_reindexing_status = None;
        payload
    }
}

/// A user-defined property attached to a feed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProperty {
    pub system_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-section display state of the edit page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedView {
    #[serde(default, deserialize_with = "null_as_default")]
    pub general_info: SectionView,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FeedView {
    pub fn is_empty(&self) -> bool {
        self.general_info == SectionView::default() && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    #[serde(default, deserialize_with = "null_as_default")]
    pub disabled: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
