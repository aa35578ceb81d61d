// SPDX-License-Identifier: GPL-3.0-only

use feed_types::SaveContext;

use crate::FeedServiceError;

/// Save and error dialogs shown on behalf of feed editing panels.
///
/// All calls are notifications; nothing is returned to the caller.
pub trait FeedPresenter: Send + Sync {
    fn show_saving_indicator(&self, context: &SaveContext, message: &str, subject: &str);

    fn hide_saving_indicator(&self);

    /// Prepare the error dialog content for `subject` from a failed save
    fn build_error_display(&self, subject: &str, failure: &FeedServiceError);

    fn show_error_dialog(&self);
}
