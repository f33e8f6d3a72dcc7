//! Feedback Renderer
//!
//! Active/visited marking, audio cues and self-expiring notifications.

use std::cell::Cell;

use crate::models::{NoticeId, NoticeKind, Notification, CLASS_ACTIVE, CLASS_VISITED};
use crate::page::{AudioOutcome, Page, Scheduler};

pub struct Feedback<P, S> {
    page: P,
    scheduler: S,
    next_id: Cell<u64>,
}

impl<P, S> Feedback<P, S>
where
    P: Page + Clone + 'static,
    S: Scheduler,
{
    pub fn new(page: P, scheduler: S) -> Self {
        Self {
            page,
            scheduler,
            next_id: Cell::new(1),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Make `element_id` the only active element of `collection`.
    /// Leaves the collection untouched when the element does not exist.
    pub fn activate(&self, collection: &str, element_id: &str) -> bool {
        if !self.page.has_element(element_id) {
            log::warn!("[FEEDBACK] no element #{} to mark active", element_id);
            return false;
        }
        self.page.remove_class_in(collection, CLASS_ACTIVE);
        self.page.add_class(element_id, CLASS_ACTIVE);
        self.page.add_class(element_id, CLASS_VISITED);
        true
    }

    pub async fn play_audio(&self, element_id: &str) -> AudioOutcome {
        let outcome = self.page.play_audio(element_id).await;
        match &outcome {
            AudioOutcome::Played => log::debug!("[FEEDBACK] playing #{}", element_id),
            AudioOutcome::Missing => log::debug!("[FEEDBACK] no audio #{}", element_id),
            AudioOutcome::Failed(err) => log::error!("[FEEDBACK] playback of #{} failed: {}", element_id, err),
        }
        outcome
    }

    /// Show a notification and schedule its removal after `delay_ms`
    pub fn notify(&self, kind: NoticeKind, text: &str, delay_ms: u32) -> NoticeId {
        let id = NoticeId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        self.page.show_notification(Notification {
            id,
            kind,
            text: text.to_string(),
        });

        let page = self.page.clone();
        self.scheduler.schedule(
            delay_ms,
            Box::new(move || {
                if !page.remove_notification(id) {
                    log::debug!("[FEEDBACK] notification {} already removed", id.0);
                }
            }),
        );
        id
    }
}
