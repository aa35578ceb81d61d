// SPDX-License-Identifier: GPL-3.0-only

use feed_contracts::{FeedServiceError, FeedServiceErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowDialog {
    Saving(SavingDialog),
    FeedErrors(FeedErrorsData),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingDialog {
    pub message: String,
    pub subject: String,
    /// Control that triggered the save, if known
    pub origin: Option<String>,
}

/// Content of the feed errors dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedErrorsData {
    pub feed_name: String,
    pub kind: FeedServiceErrorKind,
    pub messages: Vec<String>,
}

impl FeedErrorsData {
    pub fn from_failure(feed_name: &str, failure: &FeedServiceError) -> Self {
        Self {
            feed_name: feed_name.to_string(),
            kind: failure.kind,
            messages: failure.display_messages(),
        }
    }

    pub fn error_count(&self) -> usize {
        self.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_data_collects_every_server_message() {
        let failure = FeedServiceError::new(FeedServiceErrorKind::Rejected, "Template missing")
            .with_messages(vec!["Template missing".into(), "Category locked".into()]);

        let data = FeedErrorsData::from_failure("Orders", &failure);

        assert_eq!(data.feed_name, "Orders");
        assert_eq!(data.messages, vec!["Template missing", "Category locked"]);
        assert_eq!(data.error_count(), 2);
    }
}
