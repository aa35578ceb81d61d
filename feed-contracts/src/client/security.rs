// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

use feed_types::{AllowedActions, FeedModel};

use crate::FeedServiceError;
use crate::client::connection::ServiceConnection;
use crate::traits::PermissionService;

const ALLOWED_ACTIONS_PATH: &str = "/v1/security/actions/allowed";

/// Permission checks backed by the feed manager's security API
#[derive(Debug, Clone)]
pub struct AccessControlClient {
    conn: ServiceConnection,
    entity_access_control: bool,
}

impl AccessControlClient {
    pub fn new(conn: ServiceConnection, entity_access_control: bool) -> Self {
        Self {
            conn,
            entity_access_control,
        }
    }

    /// Service-level actions the current user holds
    pub async fn allowed_service_actions(&self) -> Result<AllowedActions, FeedServiceError> {
        self.conn.get_json(ALLOWED_ACTIONS_PATH).await
    }
}

#[async_trait]
impl PermissionService for AccessControlClient {
    async fn has_permission(
        &self,
        scope: &str,
        feed: &FeedModel,
        action: &str,
    ) -> Result<bool, FeedServiceError> {
        let service = self.allowed_service_actions().await?;
        let permitted = is_permitted(&service, scope, feed, action, self.entity_access_control);

        tracing::debug!(
            scope,
            action,
            feed = %feed.system_feed_name,
            permitted,
            "permission check"
        );

        Ok(permitted)
    }
}

/// The scope must be held at service level. With entity access control on,
/// a feed that reports its own allowed actions must also grant `action`.
pub fn is_permitted(
    service: &AllowedActions,
    scope: &str,
    feed: &FeedModel,
    action: &str,
    entity_access_control: bool,
) -> bool {
    if !service.contains(scope) {
        return false;
    }

    match (&feed.allowed_actions, entity_access_control) {
        (Some(entity), true) => entity.contains(action),
        _ => true,
    }
}
