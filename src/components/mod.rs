//! UI Components
//!
//! Leptos components mounted into server-rendered containers.

mod notification_list;

pub use notification_list::NotificationList;
