// SPDX-License-Identifier: GPL-3.0-only

/// Text lookup by message key
pub trait Translate: Send + Sync {
    fn translate(&self, key: &str) -> String;
}
