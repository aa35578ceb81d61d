// SPDX-License-Identifier: GPL-3.0-only

/// What triggered a save, passed through to the presenter so it can anchor
/// its saving indicator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveContext {
    pub origin: Option<String>,
}

impl SaveContext {
    pub fn from_control(id: impl Into<String>) -> Self {
        Self {
            origin: Some(id.into()),
        }
    }
}
