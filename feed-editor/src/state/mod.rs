// SPDX-License-Identifier: GPL-3.0-only

pub mod dialogs;
pub mod feed;
pub mod feed_definition;

pub use dialogs::{FeedErrorsData, SavingDialog, ShowDialog};
pub use feed::SharedFeed;
pub use feed_definition::{EditMode, FeedDefinitionPanel};
