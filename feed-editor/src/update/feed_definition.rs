// SPDX-License-Identifier: GPL-3.0-only

use feed_contracts::{EDIT_FEED_DETAILS, FEEDS_EDIT, FeedServiceError};
use feed_types::{FeedDraft, SaveContext, SaveFeedResponse};

use crate::errors::{UiErrorContext, log_error_and_show_dialog};
use crate::message::FeedDefinitionMessage;
use crate::services::FeedServices;
use crate::state::FeedDefinitionPanel;
use crate::task::Task;

/// Translation key for the saving indicator
pub const SAVING_MESSAGE_KEY: &str = "feed-definition-saving";

/// Ask the permission service whether the feed's details may be edited.
/// A failed check resolves to "not allowed".
pub fn check_permission(
    panel: &FeedDefinitionPanel,
    services: &FeedServices,
) -> Task<FeedDefinitionMessage> {
    let permissions = services.permissions.clone();
    let feed = panel.model.snapshot();

    Task::perform(
        async move {
            match permissions
                .has_permission(FEEDS_EDIT, &feed, EDIT_FEED_DETAILS)
                .await
            {
                Ok(granted) => granted,
                Err(e) => {
                    tracing::warn!(%e, feed = %feed.system_feed_name, "permission check failed; editing disabled");
                    false
                }
            }
        },
        FeedDefinitionMessage::PermissionResolved,
    )
}

pub fn update(
    panel: &mut FeedDefinitionPanel,
    message: FeedDefinitionMessage,
    services: &FeedServices,
) -> Task<FeedDefinitionMessage> {
    match message {
        FeedDefinitionMessage::PermissionResolved(granted) => {
            let disabled = panel.model.with(|feed| feed.is_disabled());
            panel.allow_edit = granted && !disabled;
        }
        FeedDefinitionMessage::Edit => begin_edit(panel),
        FeedDefinitionMessage::NameUpdate(name) => edit_draft(panel, |d| d.feed_name = name),
        FeedDefinitionMessage::SystemNameUpdate(name) => {
            edit_draft(panel, |d| d.system_feed_name = name)
        }
        FeedDefinitionMessage::DescriptionUpdate(description) => {
            edit_draft(panel, |d| d.description = description)
        }
        FeedDefinitionMessage::TemplateUpdate(template_id) => {
            edit_draft(panel, |d| d.template_id = template_id)
        }
        FeedDefinitionMessage::AllowIndexingUpdate(allow) => {
            edit_draft(panel, |d| d.allow_indexing = allow)
        }
        FeedDefinitionMessage::Cancel => cancel(panel),
        FeedDefinitionMessage::Save(context) => return save(panel, context, services),
        FeedDefinitionMessage::SaveComplete(Ok(response)) => {
            save_succeeded(panel, response, services)
        }
        FeedDefinitionMessage::SaveComplete(Err(e)) => save_failed(panel, e, services),
    }

    Task::none()
}

fn begin_edit(panel: &mut FeedDefinitionPanel) {
    if !panel.allow_edit {
        tracing::debug!("edit requested without edit permission; ignoring");
        return;
    }
    if panel.saving {
        tracing::debug!("edit requested while a save is in progress; ignoring");
        return;
    }

    panel.draft = panel.model.with(FeedDraft::from_feed);
    panel.editable = true;
}

fn edit_draft(panel: &mut FeedDefinitionPanel, f: impl FnOnce(&mut FeedDraft)) {
    if !panel.editable || panel.saving {
        return;
    }
    f(&mut panel.draft);
}

fn cancel(panel: &mut FeedDefinitionPanel) {
    if panel.saving {
        tracing::debug!("cancel received while a save is in progress; ignoring");
        return;
    }

    panel.draft = FeedDraft::default();
    panel.editable = false;
}

fn save(
    panel: &mut FeedDefinitionPanel,
    context: SaveContext,
    services: &FeedServices,
) -> Task<FeedDefinitionMessage> {
    if panel.saving {
        tracing::warn!("save received while a previous save is in progress; ignoring");
        return Task::none();
    }
    if !panel.editable {
        tracing::warn!("save received outside of edit mode; ignoring");
        return Task::none();
    }

    let subject = panel.model.display_name();
    services.presenter.show_saving_indicator(
        &context,
        &services.translator.translate(SAVING_MESSAGE_KEY),
        &subject,
    );

    let payload = panel.model.with(|feed| feed.save_payload(&panel.draft));
    panel.saving = true;

    let persistence = services.persistence.clone();
    Task::perform(
        async move { persistence.save_feed(&payload).await },
        FeedDefinitionMessage::SaveComplete,
    )
}

fn save_succeeded(
    panel: &mut FeedDefinitionPanel,
    response: SaveFeedResponse,
    services: &FeedServices,
) {
    if !panel.saving {
        tracing::warn!("save completion received with no save in progress; ignoring");
        return;
    }

    services.presenter.hide_saving_indicator();
    panel.saving = false;
    panel.editable = false;

    let draft = std::mem::take(&mut panel.draft);
    let status = response.history_reindexing_status().map(str::to_string);
    panel.model.update(|feed| {
        draft.apply_to(feed);
        feed.history_reindexing_status = status;
    });

    tracing::info!(feed = %draft.system_feed_name, "feed definition saved");
}

fn save_failed(panel: &mut FeedDefinitionPanel, err: FeedServiceError, services: &FeedServices) {
    if !panel.saving {
        tracing::warn!(%err, "save failure received with no save in progress; ignoring");
        return;
    }

    services.presenter.hide_saving_indicator();
    panel.saving = false;

    let (subject, system_name, feed_id) = panel.model.with(|feed| {
        (
            feed.display_name().to_string(),
            feed.system_feed_name.clone(),
            feed.id.clone(),
        )
    });
    log_error_and_show_dialog(
        services.presenter.as_ref(),
        &subject,
        &err,
        UiErrorContext::new("save_feed_definition")
            .feed(&system_name)
            .feed_id(feed_id.as_deref()),
    );

    // Back to edit mode with the draft intact so the user can correct and retry.
    panel.editable = true;
}
