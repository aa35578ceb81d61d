// SPDX-License-Identifier: GPL-3.0-only

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use feed_contracts::{
    FeedPersistence, FeedPresenter, FeedServiceError, FeedServiceErrorKind, PermissionService,
    Translate,
};
use feed_editor::FeedServices;
use feed_types::{FeedModel, SaveContext, SaveFeedResponse};
use serde_json::json;

pub const SAVING_TEXT: &str = "Saving feed definition";

/// `{feedName:"A", systemFeedName:"a_sys", description:"d", templateId:"t1", allowIndexing:false}`
pub fn feed_a() -> FeedModel {
    serde_json::from_value(json!({
        "id": "f-a",
        "feedName": "A",
        "systemFeedName": "a_sys",
        "description": "d",
        "templateId": "t1",
        "allowIndexing": false,
        "historyReindexingStatus": "NEVER_RUN",
        "userProperties": [{"systemName": "owner", "value": "ops"}],
        "category": {"systemName": "sales"}
    }))
    .expect("fixture feed")
}

pub fn success(status: &str) -> Result<SaveFeedResponse, FeedServiceError> {
    Ok(serde_json::from_value(json!({
        "feedMetadata": {"historyReindexingStatus": status}
    }))
    .expect("fixture response"))
}

/// A confirmed save whose answer carries no feed metadata at all
pub fn bare_success() -> Result<SaveFeedResponse, FeedServiceError> {
    Ok(serde_json::from_value(json!({"success": true})).expect("fixture response"))
}

pub fn failure(message: &str) -> Result<SaveFeedResponse, FeedServiceError> {
    Err(
        FeedServiceError::new(FeedServiceErrorKind::Rejected, message)
            .with_messages(vec![message.to_string()]),
    )
}

pub struct FakePermissions {
    answer: Result<bool, FeedServiceError>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakePermissions {
    pub fn granting(granted: bool) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(granted),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            answer: Err(FeedServiceError::new(
                FeedServiceErrorKind::Unavailable,
                "security service down",
            )),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl PermissionService for FakePermissions {
    async fn has_permission(
        &self,
        scope: &str,
        _feed: &FeedModel,
        action: &str,
    ) -> Result<bool, FeedServiceError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((scope.to_string(), action.to_string()));
        self.answer.clone()
    }
}

/// Answers saves from a queue and records every payload it was sent
#[derive(Default)]
pub struct FakePersistence {
    outcomes: Mutex<VecDeque<Result<SaveFeedResponse, FeedServiceError>>>,
    payloads: Mutex<Vec<FeedModel>>,
}

impl FakePersistence {
    pub fn answering(
        outcomes: impl IntoIterator<Item = Result<SaveFeedResponse, FeedServiceError>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn payloads(&self) -> Vec<FeedModel> {
        self.payloads.lock().expect("payloads lock").clone()
    }
}

#[async_trait]
impl FeedPersistence for FakePersistence {
    async fn save_feed(&self, feed: &FeedModel) -> Result<SaveFeedResponse, FeedServiceError> {
        self.payloads
            .lock()
            .expect("payloads lock")
            .push(feed.clone());
        self.outcomes
            .lock()
            .expect("outcomes lock")
            .pop_front()
            .unwrap_or_else(|| failure("no scripted outcome"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    Saving {
        origin: Option<String>,
        message: String,
        subject: String,
    },
    HideSaving,
    BuildErrors {
        subject: String,
        message: String,
    },
    ShowErrors,
}

#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<PresenterEvent>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<PresenterEvent> {
        self.events.lock().expect("events lock").clone()
    }

    fn push(&self, event: PresenterEvent) {
        self.events.lock().expect("events lock").push(event);
    }
}

impl FeedPresenter for RecordingPresenter {
    fn show_saving_indicator(&self, context: &SaveContext, message: &str, subject: &str) {
        self.push(PresenterEvent::Saving {
            origin: context.origin.clone(),
            message: message.to_string(),
            subject: subject.to_string(),
        });
    }

    fn hide_saving_indicator(&self) {
        self.push(PresenterEvent::HideSaving);
    }

    fn build_error_display(&self, subject: &str, failure: &FeedServiceError) {
        self.push(PresenterEvent::BuildErrors {
            subject: subject.to_string(),
            message: failure.message.clone(),
        });
    }

    fn show_error_dialog(&self) {
        self.push(PresenterEvent::ShowErrors);
    }
}

pub struct FakeTranslator;

impl Translate for FakeTranslator {
    fn translate(&self, key: &str) -> String {
        match key {
            "feed-definition-saving" => SAVING_TEXT.to_string(),
            other => other.to_string(),
        }
    }
}

pub struct Harness {
    pub permissions: Arc<FakePermissions>,
    pub persistence: Arc<FakePersistence>,
    pub presenter: Arc<RecordingPresenter>,
}

impl Harness {
    pub fn new(permissions: Arc<FakePermissions>, persistence: Arc<FakePersistence>) -> Self {
        Self {
            permissions,
            persistence,
            presenter: Arc::new(RecordingPresenter::default()),
        }
    }

    pub fn services(&self) -> FeedServices {
        FeedServices {
            permissions: self.permissions.clone(),
            persistence: self.persistence.clone(),
            presenter: self.presenter.clone(),
            translator: Arc::new(FakeTranslator),
        }
    }
}
