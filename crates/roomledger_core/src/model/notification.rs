//! Notification domain model.
//!
//! A notification is a persisted announcement record only; no delivery
//! mechanism is modeled.

use serde::{Deserialize, Serialize};

use crate::model::{require_non_empty, EntityId, ValidationError};

/// Audience selector for an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationScope {
    /// Every tenant in the portfolio.
    All,
    /// Tenants of specific buildings.
    Building,
    /// Tenants of specific blocks.
    Block,
    /// Tenants of specific rooms.
    Room,
    /// Specific tenants.
    Tenant,
}

impl NotificationScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Building => "building",
            Self::Block => "block",
            Self::Room => "room",
            Self::Tenant => "tenant",
        }
    }
}

/// Broadcast announcement scoped to all tenants or to specific entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub scope: NotificationScope,
    /// Target entity ids for non-`All` scopes. `None` for `All`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ids: Option<Vec<EntityId>>,
    pub created_at: i64,
}

/// Fields required to publish a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub title: String,
    pub content: String,
    pub scope: NotificationScope,
    pub target_ids: Option<Vec<EntityId>>,
}

impl NewNotification {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.title, "notification", "title")?;
        require_non_empty(&self.content, "notification", "content")
    }
}
