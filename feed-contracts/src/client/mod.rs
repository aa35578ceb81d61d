// SPDX-License-Identifier: GPL-3.0-only

//! REST client wrappers for feed manager operations

pub mod connection;
pub mod feeds;
pub mod security;

pub use connection::{ClientConfig, ServiceConnection};
pub use feeds::FeedManagerClient;
pub use security::AccessControlClient;
