// SPDX-License-Identifier: GPL-3.0-only

use crate::message::FeedDefinitionMessage;
use crate::services::FeedServices;
use crate::state::{FeedDefinitionPanel, SharedFeed};
use crate::task::Task;

pub const APP_ID: &str = "feed-editor";

/// Owns the feed definition panel and drives its tasks to completion
#[derive(Debug)]
pub struct FeedEditorApp {
    panel: FeedDefinitionPanel,
    services: FeedServices,
}

impl FeedEditorApp {
    /// Build the app around `feed`. The returned task runs the permission
    /// check; until it resolves the panel refuses to enter edit mode.
    pub fn new(feed: SharedFeed, services: FeedServices) -> (Self, Task<FeedDefinitionMessage>) {
        let panel = FeedDefinitionPanel::new(feed);
        let command = crate::update::check_permission(&panel, &services);

        (Self { panel, services }, command)
    }

    pub fn panel(&self) -> &FeedDefinitionPanel {
        &self.panel
    }

    pub fn update(&mut self, message: FeedDefinitionMessage) -> Task<FeedDefinitionMessage> {
        tracing::trace!(?message, "feed definition message");
        crate::update::update(&mut self.panel, message, &self.services)
    }

    /// Resolve `task`, feeding every resulting message back into `update`
    /// until no work is left
    pub async fn run(&mut self, task: Task<FeedDefinitionMessage>) {
        let mut next = task.resolve().await;
        while let Some(message) = next {
            next = self.update(message).resolve().await;
        }
    }

    pub async fn dispatch(&mut self, message: FeedDefinitionMessage) {
        let task = self.update(message);
        self.run(task).await;
    }
}
