// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedServiceErrorKind {
    InvalidInput,
    NotFound,
    PermissionDenied,
    Conflict,
    Timeout,
    Unavailable,
    /// The server answered but refused the request
    Rejected,
    Internal,
}

impl FeedServiceErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidInput,
            401 | 403 => Self::PermissionDenied,
            404 => Self::NotFound,
            409 => Self::Conflict,
            408 | 504 => Self::Timeout,
            422 => Self::Rejected,
            502 | 503 => Self::Unavailable,
            _ => Self::Internal,
        }
    }
}

/// Any failure reported by, or while talking to, the feed manager
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind:?}: {message}")]
pub struct FeedServiceError {
    pub kind: FeedServiceErrorKind,
    pub message: String,
    /// Individual messages reported by the server, if any
    #[serde(default)]
    pub error_messages: Vec<String>,
}

/// Error body produced by the feed manager's REST layer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    developer_message: Option<String>,
}

impl FeedServiceError {
    pub fn new(kind: FeedServiceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            error_messages: Vec::new(),
        }
    }

    pub fn with_messages(mut self, messages: Vec<String>) -> Self {
        self.error_messages = messages;
        self
    }

    /// Build an error from a non-success HTTP answer, preferring the
    /// server's own message when the body carries one
    pub fn from_response(status: u16, body: &str) -> Self {
        let kind = FeedServiceErrorKind::from_status(status);
        let parsed = serde_json::from_str::<RestErrorBody>(body).ok();

        let message = parsed
            .as_ref()
            .and_then(|b| b.message.clone().or_else(|| b.developer_message.clone()))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("feed manager answered HTTP {status}"));

        let details = parsed
            .and_then(|b| b.developer_message)
            .filter(|m| *m != message && !m.trim().is_empty())
            .into_iter()
            .collect();

        Self::new(kind, message).with_messages(details)
    }

    /// Every message worth showing to the user, headline first
    pub fn display_messages(&self) -> Vec<String> {
        let mut messages = vec![self.message.clone()];
        messages.extend(
            self.error_messages
                .iter()
                .filter(|m| **m != self.message)
                .cloned(),
        );
        messages
    }
}

impl From<reqwest::Error> for FeedServiceError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            FeedServiceErrorKind::Timeout
        } else if err.is_connect() {
            FeedServiceErrorKind::Unavailable
        } else if let Some(status) = err.status() {
            FeedServiceErrorKind::from_status(status.as_u16())
        } else if err.is_decode() || err.is_builder() {
            FeedServiceErrorKind::Internal
        } else {
            FeedServiceErrorKind::Unavailable
        };
        Self::new(kind, err.to_string())
    }
}

impl From<serde_json::Error> for FeedServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(
            FeedServiceErrorKind::Internal,
            format!("Parse error: {err}"),
        )
    }
}
