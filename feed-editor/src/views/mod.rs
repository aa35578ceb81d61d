// SPDX-License-Identifier: GPL-3.0-only

//! Plain-text rendering of panels and dialogs for the command line

pub mod dialogs;
pub mod feed_definition;
