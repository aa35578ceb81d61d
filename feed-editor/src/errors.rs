// SPDX-License-Identifier: GPL-3.0-only

use feed_contracts::{FeedPresenter, FeedServiceError};

pub struct UiErrorContext<'a> {
    pub operation: &'static str,
    pub feed: Option<&'a str>,
    pub feed_id: Option<&'a str>,
}

impl<'a> UiErrorContext<'a> {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            feed: None,
            feed_id: None,
        }
    }

    pub fn feed(mut self, system_name: &'a str) -> Self {
        self.feed = Some(system_name);
        self
    }

    pub fn feed_id(mut self, id: Option<&'a str>) -> Self {
        self.feed_id = id;
        self
    }
}

pub fn log_error_and_show_dialog(
    presenter: &dyn FeedPresenter,
    subject: &str,
    err: &FeedServiceError,
    ctx: UiErrorContext<'_>,
) {
    tracing::error!(
        ?err,
        kind = ?err.kind,
        operation = ctx.operation,
        feed = ?ctx.feed,
        feed_id = ?ctx.feed_id,
        "error surfaced in UI"
    );

    presenter.build_error_display(subject, err);
    presenter.show_error_dialog();
}
