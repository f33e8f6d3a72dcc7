//! Test Doubles
//!
//! In-memory stand-ins for the browser capabilities.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;

use crate::commands::{RawResponse, Transport};
use crate::error::DispatchError;
use crate::models::{NoticeId, Notification};
use crate::page::{AudioOutcome, Page, Scheduler};

// ========================
// Transport
// ========================

pub type ReplySender = oneshot::Sender<Result<RawResponse, DispatchError>>;

enum PendingReply {
    Ready(Result<RawResponse, DispatchError>),
    Deferred(oneshot::Receiver<Result<RawResponse, DispatchError>>),
}

#[derive(Default)]
struct TransportState {
    requests: Vec<(String, String)>,
    replies: VecDeque<PendingReply>,
}

/// Answers requests in FIFO order from queued replies
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Rc<RefCell<TransportState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) {
        let raw = RawResponse { status, body: body.to_string() };
        self.state.borrow_mut().replies.push_back(PendingReply::Ready(Ok(raw)));
    }

    pub fn fail(&self, err: DispatchError) {
        self.state.borrow_mut().replies.push_back(PendingReply::Ready(Err(err)));
    }

    /// Queue a reply the test settles later through the returned sender
    pub fn defer(&self) -> ReplySender {
        let (tx, rx) = oneshot::channel();
        self.state.borrow_mut().replies.push_back(PendingReply::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.state.borrow().requests.clone()
    }
}

impl Transport for FakeTransport {
    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, DispatchError> {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.requests.push((path.to_string(), body));
            state.replies.pop_front().expect("no reply queued")
        };
        match pending {
            PendingReply::Ready(result) => result,
            PendingReply::Deferred(rx) => rx
                .await
                .unwrap_or_else(|_| Err(DispatchError::Transport("canceled".to_string()))),
        }
    }
}

pub fn ok_json(body: &str) -> Result<RawResponse, DispatchError> {
    Ok(RawResponse { status: 200, body: body.to_string() })
}

// ========================
// Page
// ========================

struct FakeElement {
    id: String,
    collection: String,
    classes: BTreeSet<String>,
}

#[derive(Default)]
struct Dom {
    elements: Vec<FakeElement>,
    audio: HashMap<String, AudioOutcome>,
    played: Vec<String>,
    notifications: Vec<Notification>,
    navigations: Vec<String>,
}

#[derive(Clone, Default)]
pub struct FakePage {
    dom: Rc<RefCell<Dom>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elements with the given ids to `collection`
    pub fn with_items(self, collection: &str, ids: &[&str]) -> Self {
        {
            let mut dom = self.dom.borrow_mut();
            for id in ids {
                dom.elements.push(FakeElement {
                    id: id.to_string(),
                    collection: collection.to_string(),
                    classes: BTreeSet::new(),
                });
            }
        }
        self
    }

    /// Register an audio element and what `play()` will do
    pub fn with_audio(self, element_id: &str, outcome: AudioOutcome) -> Self {
        self.dom.borrow_mut().audio.insert(element_id.to_string(), outcome);
        self
    }

    pub fn classes(&self, element_id: &str) -> Vec<String> {
        self.dom
            .borrow()
            .elements
            .iter()
            .find(|el| el.id == element_id)
            .map(|el| el.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Ids in `collection` currently carrying `class`
    pub fn with_class(&self, collection: &str, class: &str) -> Vec<String> {
        self.dom
            .borrow()
            .elements
            .iter()
            .filter(|el| el.collection == collection && el.classes.contains(class))
            .map(|el| el.id.clone())
            .collect()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.dom.borrow().notifications.clone()
    }

    pub fn played(&self) -> Vec<String> {
        self.dom.borrow().played.clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.dom.borrow().navigations.clone()
    }
}

impl Page for FakePage {
    fn has_element(&self, element_id: &str) -> bool {
        self.dom.borrow().elements.iter().any(|el| el.id == element_id)
    }

    fn remove_class_in(&self, collection: &str, class: &str) {
        for el in self.dom.borrow_mut().elements.iter_mut() {
            if el.collection == collection {
                el.classes.remove(class);
            }
        }
    }

    fn add_class(&self, element_id: &str, class: &str) {
        let mut dom = self.dom.borrow_mut();
        if let Some(el) = dom.elements.iter_mut().find(|el| el.id == element_id) {
            el.classes.insert(class.to_string());
        }
    }

    async fn play_audio(&self, element_id: &str) -> AudioOutcome {
        let mut dom = self.dom.borrow_mut();
        match dom.audio.get(element_id).cloned() {
            Some(outcome) => {
                dom.played.push(element_id.to_string());
                outcome
            }
            None => AudioOutcome::Missing,
        }
    }

    fn show_notification(&self, notification: Notification) {
        self.dom.borrow_mut().notifications.push(notification);
    }

    fn remove_notification(&self, id: NoticeId) -> bool {
        let mut dom = self.dom.borrow_mut();
        let before = dom.notifications.len();
        dom.notifications.retain(|n| n.id != id);
        dom.notifications.len() != before
    }

    fn navigate(&self, path: &str) {
        self.dom.borrow_mut().navigations.push(path.to_string());
    }
}

// ========================
// Scheduler
// ========================

struct Timer {
    due: u32,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: u32,
    seq: u64,
    timers: Vec<Timer>,
}

/// Manual clock; timers fire only from `advance`
#[derive(Clone, Default)]
pub struct FakeScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl FakeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u32 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    /// Move the clock forward and run every timer that came due, in order
    pub fn advance(&self, ms: u32) {
        let mut due = {
            let mut clock = self.clock.borrow_mut();
            clock.now += ms;
            let now = clock.now;
            let (due, rest): (Vec<Timer>, Vec<Timer>) =
                clock.timers.drain(..).partition(|t| t.due <= now);
            clock.timers = rest;
            due
        };
        due.sort_by_key(|t| (t.due, t.seq));
        for timer in due {
            (timer.task)();
        }
    }
}

impl Scheduler for FakeScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay_ms;
        let seq = clock.seq;
        clock.seq += 1;
        clock.timers.push(Timer { due, seq, task });
    }
}
