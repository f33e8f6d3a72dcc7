//! Notification Store
//!
//! Uses Leptos reactive_stores so the notification list re-renders per field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{NoticeId, Notification};

/// Notifications currently on screen, oldest first
#[derive(Clone, Debug, Default, Store)]
pub struct NotificationState {
    pub notices: Vec<Notification>,
}

/// Type alias for the store
pub type NotificationStore = Store<NotificationState>;

pub fn new_notification_store() -> NotificationStore {
    Store::new(NotificationState::default())
}

// ========================
// Store Helper Functions
// ========================

pub fn store_push_notice(store: &NotificationStore, notice: Notification) {
    store.notices().write().push(notice);
}

/// Remove a notice by ID; false if it was not there
pub fn store_remove_notice(store: &NotificationStore, id: NoticeId) -> bool {
    let field = store.notices();
    let mut notices = field.write();
    let before = notices.len();
    notices.retain(|notice| notice.id != id);
    notices.len() != before
}

/// Tracked read of the current notices
pub fn store_notices(store: &NotificationStore) -> Vec<Notification> {
    store.notices().get()
}
