// SPDX-License-Identifier: GPL-3.0-only

use feed_types::FeedDraft;

use crate::state::feed::SharedFeed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    ReadOnly,
    Editing,
}

/// The general info section of a feed: name, system name, description,
/// template and indexing flag.
///
/// Editing happens on `draft`; the shared feed only changes once a save has
/// been confirmed by the feed manager.
#[derive(Debug, Clone)]
pub struct FeedDefinitionPanel {
    pub(crate) model: SharedFeed,
    pub(crate) draft: FeedDraft,
    pub(crate) editable: bool,
    /// Stays false until the permission check has resolved
    pub(crate) allow_edit: bool,
    /// A save request is outstanding
    pub(crate) saving: bool,
}

impl FeedDefinitionPanel {
    pub fn new(model: SharedFeed) -> Self {
        Self {
            model,
            draft: FeedDraft::default(),
            editable: false,
            allow_edit: false,
            saving: false,
        }
    }

    pub fn model(&self) -> &SharedFeed {
        &self.model
    }

    pub fn draft(&self) -> &FeedDraft {
        &self.draft
    }

    pub fn editable(&self) -> bool {
        self.editable
    }

    pub fn allow_edit(&self) -> bool {
        self.allow_edit
    }

    pub fn saving(&self) -> bool {
        self.saving
    }

    pub fn mode(&self) -> EditMode {
        if self.editable {
            EditMode::Editing
        } else {
            EditMode::ReadOnly
        }
    }

    /// Whether the edit affordance should be offered
    pub fn can_edit(&self) -> bool {
        self.allow_edit && !self.editable && !self.saving
    }

    pub fn can_save(&self) -> bool {
        self.editable && !self.saving
    }

    /// True when the draft differs from what the feed currently holds
    pub fn has_changes(&self) -> bool {
        self.editable && self.model.with(|feed| !self.draft.matches(feed))
    }
}
