// SPDX-License-Identifier: GPL-3.0-only

//! Feed definition editor
//!
//! The general info panel of the feed edit page, run headless: permission
//! gating, a draft taken on edit, and a save round trip to the feed manager
//! whose outcome decides whether the draft reaches the shared feed.

pub mod app;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod logging;
pub mod message;
pub mod presenter;
pub mod services;
pub mod state;
pub mod task;
pub mod update;
pub mod views;

pub use app::FeedEditorApp;
pub use message::FeedDefinitionMessage;
pub use presenter::DialogPresenter;
pub use services::FeedServices;
pub use state::{FeedDefinitionPanel, SharedFeed};
pub use task::Task;
