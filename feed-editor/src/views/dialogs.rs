// SPDX-License-Identifier: GPL-3.0-only

use crate::fl;
use crate::state::ShowDialog;

pub fn dialog(dialog: &ShowDialog) -> String {
    match dialog {
        ShowDialog::Saving(saving) => {
            format!("{}: {} ({})", fl!("saving-dialog-title"), saving.message, saving.subject)
        }
        ShowDialog::FeedErrors(data) => {
            let mut out = format!(
                "{}\n{}",
                fl!("feed-errors-title", name = data.feed_name.as_str()),
                fl!("feed-errors-count", count = data.error_count())
            );
            for message in &data.messages {
                out.push_str("\n  - ");
                out.push_str(message);
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FeedErrorsData, SavingDialog};
    use feed_contracts::FeedServiceErrorKind;

    #[test]
    fn error_dialog_lists_each_message() {
        let text = dialog(&ShowDialog::FeedErrors(FeedErrorsData {
            feed_name: "Orders".into(),
            kind: FeedServiceErrorKind::Rejected,
            messages: vec!["Template missing".into(), "Category locked".into()],
        }));

        assert!(text.contains("Orders"));
        assert!(text.contains("\n  - Template missing"));
        assert!(text.contains("\n  - Category locked"));
    }

    #[test]
    fn saving_dialog_names_the_feed() {
        let text = dialog(&ShowDialog::Saving(SavingDialog {
            message: "Saving feed definition".into(),
            subject: "Orders".into(),
            origin: None,
        }));

        assert!(text.starts_with("Saving: Saving feed definition (Orders)"));
    }
}
