// SPDX-License-Identifier: GPL-3.0-only

use feed_types::FeedDraft;

use crate::fl;
use crate::state::{EditMode, FeedDefinitionPanel};

/// Render the general info section: the draft while editing, the feed otherwise
pub fn feed_definition(panel: &FeedDefinitionPanel) -> String {
    let (fields, status) = panel.model().with(|feed| {
        let fields = match panel.mode() {
            EditMode::Editing => panel.draft().clone(),
            EditMode::ReadOnly => FeedDraft::from_feed(feed),
        };
        (fields, feed.history_reindexing_status.clone())
    });

    let mode = match panel.mode() {
        EditMode::Editing => fl!("feed-definition-editing"),
        EditMode::ReadOnly => fl!("feed-definition-read-only"),
    };

    let rows = [
        (fl!("field-feed-name"), fields.feed_name),
        (fl!("field-system-name"), fields.system_feed_name),
        (fl!("field-description"), fields.description),
        (fl!("field-template"), fields.template_id),
        (fl!("field-allow-indexing"), yes_no(fields.allow_indexing)),
        (
            fl!("field-history-reindexing"),
            status.unwrap_or_else(|| fl!("value-none")),
        ),
    ];

    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);

    let mut out = format!("{} [{mode}]", fl!("feed-definition"));
    for (label, value) in rows {
        out.push_str(&format!("\n  {label:<width$}  {value}"));
    }
    out
}

fn yes_no(value: bool) -> String {
    if value { fl!("value-yes") } else { fl!("value-no") }
}
