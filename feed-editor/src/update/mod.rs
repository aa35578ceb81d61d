// SPDX-License-Identifier: GPL-3.0-only

pub mod feed_definition;

pub use feed_definition::{check_permission, update};
