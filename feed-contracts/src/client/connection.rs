// SPDX-License-Identifier: GPL-3.0-only

//! Shared HTTP connection to the feed manager
//!
//! One `reqwest::Client` is built per connection and cloned into every
//! client created from it, so they share a connection pool.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::FeedServiceError;

/// Where and how to reach the feed manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the feed manager's REST proxy, e.g. `http://localhost:8400/proxy`
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServiceConnection {
    http: reqwest::Client,
    base_url: String,
}

impl ServiceConnection {
    pub fn new(config: &ClientConfig) -> Result<Self, FeedServiceError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Absolute URL for an API path such as `/v1/feedmgr/feeds`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the JSON answer
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, FeedServiceError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_json(status, &body)
    }
}

/// A non-2xx status becomes an error built from the body; anything else must
/// parse as `T`
pub(crate) fn decode_json<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, FeedServiceError> {
    if !(200..300).contains(&status) {
        return Err(FeedServiceError::from_response(status, body));
    }

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeedServiceErrorKind;
    use serde_json::Value;

    #[test]
    fn endpoints_join_without_doubled_slashes() {
        let conn = ServiceConnection::new(&ClientConfig {
            base_url: "http://localhost:8400/proxy/".into(),
            timeout: Duration::from_secs(5),
        })
        .expect("build connection");

        assert_eq!(
            conn.endpoint("/v1/feedmgr/feeds"),
            "http://localhost:8400/proxy/v1/feedmgr/feeds"
        );
        assert_eq!(
            conn.endpoint("v1/security/actions/allowed"),
            "http://localhost:8400/proxy/v1/security/actions/allowed"
        );
    }

    #[test]
    fn error_status_wins_over_a_parseable_body() {
        let error = decode_json::<Value>(503, r#"{"message":"Metadata store offline"}"#)
            .expect_err("unavailable");

        assert_eq!(error.kind, FeedServiceErrorKind::Unavailable);
        assert_eq!(error.message, "Metadata store offline");
    }

    #[test]
    fn success_status_needs_a_readable_body() {
        let value: Value = decode_json(200, r#"{"ok":true}"#).expect("decoded");
        assert_eq!(value["ok"], Value::Bool(true));

        let error = decode_json::<Value>(204, "").expect_err("empty body");
        assert_eq!(error.kind, FeedServiceErrorKind::Internal);
    }
}
