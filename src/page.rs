//! Browser Capabilities
//!
//! The DOM and timer surface the dispatcher needs. The browser
//! implementations live in `browser`; tests use in-memory fakes.

use crate::models::{NoticeId, Notification};

/// Result of trying to start an audio cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioOutcome {
    Played,
    /// No audio element with that id
    Missing,
    Failed(String),
}

pub trait Page {
    fn has_element(&self, element_id: &str) -> bool;

    /// Remove `class` from every element of the collection bound under `collection`
    fn remove_class_in(&self, collection: &str, class: &str);

    fn add_class(&self, element_id: &str, class: &str);

    async fn play_audio(&self, element_id: &str) -> AudioOutcome;

    fn show_notification(&self, notification: Notification);

    /// Returns false when the notification was already gone
    fn remove_notification(&self, id: NoticeId) -> bool;

    fn navigate(&self, path: &str);
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
