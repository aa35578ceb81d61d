// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

use feed_types::{FeedModel, SaveFeedResponse};

use crate::client::connection::{ServiceConnection, decode_json};
use crate::traits::FeedPersistence;
use crate::{FeedServiceError, FeedServiceErrorKind};

const FEEDS_PATH: &str = "/v1/feedmgr/feeds";

/// Client for loading and saving feeds
#[derive(Debug, Clone)]
pub struct FeedManagerClient {
    conn: ServiceConnection,
}

impl FeedManagerClient {
    pub fn new(conn: ServiceConnection) -> Self {
        Self { conn }
    }

    /// Fetch the full feed document
    pub async fn load_feed(&self, feed_id: &str) -> Result<FeedModel, FeedServiceError> {
        tracing::debug!(feed_id, "loading feed");
        self.conn.get_json(&format!("{FEEDS_PATH}/{feed_id}")).await
    }
}

#[async_trait]
impl FeedPersistence for FeedManagerClient {
    async fn save_feed(&self, feed: &FeedModel) -> Result<SaveFeedResponse, FeedServiceError> {
        let url = self.conn.endpoint(FEEDS_PATH);
        tracing::debug!(%url, feed = %feed.system_feed_name, "saving feed");

        let response = self.conn.http().post(&url).json(feed).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        interpret_save(status, &body)
    }
}

/// Turn a raw save answer into a response, treating both HTTP errors and
/// refused saves as failures
pub(crate) fn interpret_save(status: u16, body: &str) -> Result<SaveFeedResponse, FeedServiceError> {
    let response: SaveFeedResponse = decode_json(status, body)?;
    if !response.success {
        let headline = response
            .error_messages
            .first()
            .cloned()
            .unwrap_or_else(|| "feed manager refused the save".to_string());
        return Err(FeedServiceError::new(FeedServiceErrorKind::Rejected, headline)
            .with_messages(response.error_messages));
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_save_yields_server_status() {
        let response = interpret_save(
            200,
            r#"{"success":true,"feedMetadata":{"feedName":"A","historyReindexingStatus":"SUCCESS"}}"#,
        )
        .expect("save accepted");

        assert_eq!(response.history_reindexing_status(), Some("SUCCESS"));
    }

    #[test]
    fn refused_save_is_an_error() {
        let error = interpret_save(
            200,
            r#"{"success":false,"errorMessages":["Template t9 does not exist","Name in use"]}"#,
        )
        .expect_err("save refused");

        assert_eq!(error.kind, FeedServiceErrorKind::Rejected);
        assert_eq!(error.message, "Template t9 does not exist");
        assert_eq!(error.error_messages.len(), 2);
    }

    #[test]
    fn http_failure_is_an_error() {
        let error = interpret_save(409, r#"{"message":"Feed was modified"}"#).expect_err("conflict");
        assert_eq!(error.kind, FeedServiceErrorKind::Conflict);
        assert_eq!(error.message, "Feed was modified");
    }

    #[test]
    fn loaded_feed_keeps_its_document() {
        let feed: FeedModel = decode_json(
            200,
            r#"{"id":"f-1","feedName":"Orders","systemFeedName":"orders","category":{"systemName":"sales"}}"#,
        )
        .expect("feed loaded");

        assert_eq!(feed.display_name(), "Orders");
        assert_eq!(feed.extra["category"]["systemName"], "sales");
    }

    #[test]
    fn missing_feed_is_not_found() {
        let error = decode_json::<FeedModel>(
            404,
            r#"{"message":"Feed f-9 not found","developerMessage":"no node at /metadata/feeds/f-9"}"#,
        )
        .expect_err("missing feed");

        assert_eq!(error.kind, FeedServiceErrorKind::NotFound);
        assert_eq!(
            error.display_messages(),
            vec!["Feed f-9 not found", "no node at /metadata/feeds/f-9"]
        );
    }

    #[test]
    fn unreadable_success_body_is_an_error() {
        let error = interpret_save(200, "not json").expect_err("garbage body");
        assert_eq!(error.kind, FeedServiceErrorKind::Internal);
    }
}
