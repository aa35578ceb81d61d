// SPDX-License-Identifier: GPL-3.0-only

//! Dialog-backed implementation of the feed presentation contract

use std::sync::{Mutex, MutexGuard};

use feed_contracts::{FeedPresenter, FeedServiceError};
use feed_types::SaveContext;

use crate::state::{FeedErrorsData, SavingDialog, ShowDialog};

#[derive(Debug, Default)]
struct DialogState {
    dialog: Option<ShowDialog>,
    /// Built ahead of `show_error_dialog`
    errors: Option<FeedErrorsData>,
}

/// Holds at most one open dialog, like a modal layer over the edit page
#[derive(Debug, Default)]
pub struct DialogPresenter {
    state: Mutex<DialogState>,
}

impl DialogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog(&self) -> Option<ShowDialog> {
        self.lock().dialog.clone()
    }

    fn lock(&self) -> MutexGuard<'_, DialogState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FeedPresenter for DialogPresenter {
    fn show_saving_indicator(&self, context: &SaveContext, message: &str, subject: &str) {
        tracing::debug!(subject, origin = ?context.origin, "showing saving dialog");
        self.lock().dialog = Some(ShowDialog::Saving(SavingDialog {
            message: message.to_string(),
            subject: subject.to_string(),
            origin: context.origin.clone(),
        }));
    }

    fn hide_saving_indicator(&self) {
        let mut state = self.lock();
        if matches!(state.dialog, Some(ShowDialog::Saving(_))) {
            state.dialog = None;
        }
    }

    fn build_error_display(&self, subject: &str, failure: &FeedServiceError) {
        self.lock().errors = Some(FeedErrorsData::from_failure(subject, failure));
    }

    fn show_error_dialog(&self) {
        let mut state = self.lock();
        match state.errors.clone() {
            Some(data) => state.dialog = Some(ShowDialog::FeedErrors(data)),
            None => tracing::warn!("error dialog requested before any error was built"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_contracts::FeedServiceErrorKind;

    #[test]
    fn hide_only_closes_the_saving_dialog() {
        let presenter = DialogPresenter::new();
        presenter.show_saving_indicator(&SaveContext::from_control("save"), "Saving", "A");
        assert!(matches!(presenter.dialog(), Some(ShowDialog::Saving(_))));

        presenter.hide_saving_indicator();
        assert_eq!(presenter.dialog(), None);

        let failure = FeedServiceError::new(FeedServiceErrorKind::Timeout, "timed out");
        presenter.build_error_display("A", &failure);
        presenter.show_error_dialog();
        presenter.hide_saving_indicator();
        assert!(matches!(presenter.dialog(), Some(ShowDialog::FeedErrors(_))));
    }

    #[test]
    fn error_dialog_needs_built_errors() {
        let presenter = DialogPresenter::new();
        presenter.show_error_dialog();
        assert_eq!(presenter.dialog(), None);
    }

    #[test]
    fn saving_dialog_keeps_origin() {
        let presenter = DialogPresenter::new();
        presenter.show_saving_indicator(&SaveContext::from_control("general-info"), "Saving", "A");

        let Some(ShowDialog::Saving(dialog)) = presenter.dialog() else {
            panic!("saving dialog not shown");
        };
        assert_eq!(dialog.origin.as_deref(), Some("general-info"));
        assert_eq!(dialog.subject, "A");
    }
}
