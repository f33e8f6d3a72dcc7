//! Browser Bindings
//!
//! `Page` and `Scheduler` over the real DOM, and event binding.

mod binder;
mod page;
mod timer;

pub use binder::{bind_groups, bind_session_select};
pub use page::BrowserPage;
pub use timer::TimeoutScheduler;
