// SPDX-License-Identifier: GPL-3.0-only

//! Allowed-action trees as returned by the feed manager's security API

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_util::null_as_default;

/// A tree of permitted actions. Holding a parent action does not imply its
/// children; each granted action is listed explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedActions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<Action>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub system_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<Action>,

    /// Title, description and anything else the server attaches
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AllowedActions {
    /// Every action system name in the tree, at any depth
    pub fn system_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        let mut stack: Vec<&Action> = self.actions.iter().collect();
        while let Some(action) = stack.pop() {
            names.insert(action.system_name.as_str());
            stack.extend(action.actions.iter());
        }
        names
    }

    pub fn contains(&self, system_name: &str) -> bool {
        self.system_names().contains(system_name)
    }
}
