//! Command Dispatcher
//!
//! One click: build the payload, POST it, render the reply.

use crate::commands::{self, Transport};
use crate::config::{GroupConfig, UiConfig};
use crate::error::DispatchError;
use crate::feedback::Feedback;
use crate::models::{CommandRequest, ItemData, NoticeId, NoticeKind, Reply};
use crate::page::{Page, Scheduler};

/// What a dispatch did to the page
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `message` reply; `active` is the element now marked active, if found
    Accepted { active: Option<String>, notice: NoticeId },
    /// `error` reply
    Rejected { notice: NoticeId },
    /// Neither field set
    Ignored,
}

pub struct Dispatcher<T, P, S> {
    config: UiConfig,
    transport: T,
    feedback: Feedback<P, S>,
}

impl<T, P, S> Dispatcher<T, P, S>
where
    T: Transport,
    P: Page + Clone + 'static,
    S: Scheduler,
{
    pub fn new(config: UiConfig, transport: T, page: P, scheduler: S) -> Self {
        Self {
            config,
            transport,
            feedback: Feedback::new(page, scheduler),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        self.feedback.page()
    }

    /// Dispatch a click and report failures the way the console always has:
    /// server errors and validation problems are shown, transport problems
    /// only logged (unless `notify_transport_errors`).
    pub async fn handle(&self, group: &GroupConfig, item: &ItemData) {
        match self.dispatch(group, item).await {
            Ok(Outcome::Accepted { active, notice }) => {
                log::debug!("[DISPATCH] {} accepted, active {:?}, notice {}", item.item_id, active, notice.0)
            }
            Ok(Outcome::Rejected { notice }) => {
                log::debug!("[DISPATCH] {} rejected, notice {}", item.item_id, notice.0)
            }
            Ok(Outcome::Ignored) => log::debug!("[DISPATCH] {} got an empty reply", item.item_id),
            Err(err) if err.is_validation() => {
                log::warn!("[DISPATCH] {} {} not sent: {}", group.class_name, item.item_id, err);
                self.feedback.notify(NoticeKind::Error, &err.to_string(), group.notification_delay_ms);
            }
            Err(err) => {
                log::error!("[DISPATCH] {} {} failed: {}", group.class_name, item.item_id, err);
                if self.config.notify_transport_errors {
                    self.feedback.notify(NoticeKind::Error, &err.to_string(), group.notification_delay_ms);
                }
            }
        }
    }

    pub async fn dispatch(&self, group: &GroupConfig, item: &ItemData) -> Result<Outcome, DispatchError> {
        let request = CommandRequest::from_item(group.payload, item)?;
        log::debug!("[DISPATCH] request: {:?}", request);

        let response = commands::send_command(&self.transport, &self.config.endpoint, &request).await?;
        log::debug!("[DISPATCH] response: {:?}", response);

        match response.reply() {
            Reply::Message(message) => self.accept(group, item, message).await,
            Reply::Error(error) => {
                let notice = self.feedback.notify(NoticeKind::Error, error, group.notification_delay_ms);
                Ok(Outcome::Rejected { notice })
            }
            Reply::Empty => Ok(Outcome::Ignored),
        }
    }

    async fn accept(&self, group: &GroupConfig, item: &ItemData, message: &str) -> Result<Outcome, DispatchError> {
        let active = match item.active_element_id(group.active_id) {
            Some(element_id) if self.feedback.activate(&group.class_name, &element_id) => Some(element_id),
            Some(_) => None,
            None => {
                log::warn!("[DISPATCH] cannot resolve element id for {}", item.item_id);
                None
            }
        };

        if group.audio {
            let audio_id = format!("{}{}", self.config.audio_prefix, item.item_id);
            self.feedback.play_audio(&audio_id).await;
        }

        let notice = self.feedback.notify(NoticeKind::Message, message, group.notification_delay_ms);
        Ok(Outcome::Accepted { active, notice })
    }
}
