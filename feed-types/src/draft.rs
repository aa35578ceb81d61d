// SPDX-License-Identifier: GPL-3.0-only

use crate::feed::FeedModel;

/// The editable subset of a feed, held while the definition panel is in edit mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedDraft {
    pub feed_name: String,
    pub system_feed_name: String,
    pub description: String,
    pub template_id: String,
    pub allow_indexing: bool,
}

impl FeedDraft {
    /// Snapshot the editable fields of `feed`
    pub fn from_feed(feed: &FeedModel) -> Self {
        Self {
            feed_name: feed.feed_name.clone(),
            system_feed_name: feed.system_feed_name.clone(),
            description: feed.description.clone(),
            template_id: feed.template_id.clone(),
            allow_indexing: feed.allow_indexing,
        }
    }

    /// Copy the editable fields into `feed`, leaving everything else alone
    pub fn apply_to(&self, feed: &mut FeedModel) {
        feed.feed_name = self.feed_name.clone();
        feed.system_feed_name = self.system_feed_name.clone();
        feed.description = self.description.clone();
        feed.template_id = self.template_id.clone();
        feed.allow_indexing = self.allow_indexing;
    }

    /// True when the draft holds exactly the editable fields of `feed`
    pub fn matches(&self, feed: &FeedModel) -> bool {
        *self == Self::from_feed(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> FeedModel {
        FeedModel {
            feed_name: "A".into(),
            system_feed_name: "a_sys".into(),
            description: "d".into(),
            template_id: "t1".into(),
            allow_indexing: false,
            history_reindexing_status: Some("NEVER_RUN".into()),
            ..Default::default()
        }
    }

    #[test]
    fn snapshot_is_isolated_from_later_model_changes() {
        let mut model = feed();
        let draft = FeedDraft::from_feed(&model);

        model.feed_name = "changed".into();
        model.allow_indexing = true;

        assert_eq!(draft.feed_name, "A");
        assert!(!draft.allow_indexing);
        assert!(!draft.matches(&model));
    }

    #[test]
    fn apply_only_touches_editable_fields() {
        let mut model = feed();
        let draft = FeedDraft {
            feed_name: "B".into(),
            system_feed_name: "b_sys".into(),
            description: "e".into(),
            template_id: "t2".into(),
            allow_indexing: true,
        };

        draft.apply_to(&mut model);

        assert!(draft.matches(&model));
        assert_eq!(model.history_reindexing_status.as_deref(), Some("NEVER_RUN"));
    }
}
