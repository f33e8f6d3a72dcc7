use gloo_timers::callback::Timeout;

use crate::page::Scheduler;

/// `setTimeout`-backed scheduler; timers are never cancelled
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let _ = Timeout::new(delay_ms, task).forget();
    }
}
