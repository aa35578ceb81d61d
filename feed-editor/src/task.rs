// SPDX-License-Identifier: GPL-3.0-only

//! Deferred work returned from `update`, resolving into the next message

use std::fmt;
use std::future::Future;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// At most one outstanding future whose output is fed back into `update`
#[must_use = "a task does nothing unless it is resolved"]
pub struct Task<M> {
    future: Option<BoxFuture<'static, M>>,
}

impl<M: Send + 'static> Task<M> {
    pub fn none() -> Self {
        Self { future: None }
    }

    /// Run `future` and map its output into a message
    pub fn perform<T, F>(future: F, map: impl FnOnce(T) -> M + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            future: Some(future.map(map).boxed()),
        }
    }

    pub fn is_none(&self) -> bool {
        self.future.is_none()
    }

    /// Wait for the task; `None` when there was nothing to do
    pub async fn resolve(self) -> Option<M> {
        match self.future {
            Some(future) => Some(future.await),
            None => None,
        }
    }
}

impl<M> fmt::Debug for Task<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("pending", &self.future.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn none_resolves_to_nothing() {
        let task: Task<u8> = Task::none();
        assert!(task.is_none());
        assert_eq!(task.resolve().await, None);
    }

    #[tokio::test]
    async fn perform_maps_output() {
        let task = Task::perform(async { 20_u32 }, |n| format!("got {n}"));
        assert!(!task.is_none());
        assert_eq!(task.resolve().await.as_deref(), Some("got 20"));
    }
}
