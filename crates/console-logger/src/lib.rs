//! Console Logger
//!
//! `log` backend for the browser console.
//! Keeps the most recent lines in a fixed-size rolling history so they can
//! be dumped after the fact (the console is often closed when things fail).

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of lines retained by the global logger
pub const DEFAULT_HISTORY: usize = 200;

/// Fixed-capacity buffer of formatted log lines, oldest dropped first
#[derive(Debug)]
pub struct RollingHistory {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingHistory {
    pub const fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Logger writing to the console and the rolling history
pub struct ConsoleLogger {
    history: Mutex<RollingHistory>,
}

impl ConsoleLogger {
    pub const fn new(capacity: usize) -> Self {
        Self {
            history: Mutex::new(RollingHistory::new(capacity)),
        }
    }

    /// Snapshot of the retained lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.history.lock() {
            Ok(history) => history.lines(),
            Err(_) => Vec::new(),
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);
        if let Ok(mut history) = self.history.lock() {
            history.push(line);
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger::new(DEFAULT_HISTORY);

/// Install the global logger. Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Change the level after installation
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Lines retained by the global logger
pub fn recent() -> Vec<String> {
    LOGGER.recent()
}

/// Parse a level name ("off", "error" .. "trace"), case-insensitive
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("{:<5} {}: {}", level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::log_1(&value),
        Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}
