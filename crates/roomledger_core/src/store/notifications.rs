//! Notification publication.
//!
//! # Invariants
//! - New notifications are prepended, so the collection reads newest first.
//! - Publication only records the announcement; no delivery happens.

use log::debug;
use uuid::Uuid;

use crate::model::notification::{NewNotification, Notification};
use crate::store::{DomainStore, StoreResult};

impl DomainStore {
    /// Publishes an announcement, newest first.
    pub fn add_notification(&mut self, new: NewNotification) -> StoreResult<Notification> {
        new.validate()?;
        let notification = Notification {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            scope: new.scope,
            target_ids: new.target_ids,
            created_at: self.now(),
        };
        debug!(
            "event=notification_published module=store id={} scope={} targets={}",
            notification.id,
            notification.scope.as_str(),
            notification
                .target_ids
                .as_ref()
                .map_or(0, |targets| targets.len())
        );
        self.notifications.insert(0, notification.clone());
        Ok(notification)
    }
}
