//! Browser Logger
//!
//! `log` backend for the browser. Every record goes to the matching
//! `console.*` method and the most recent lines are kept in a rolling
//! buffer so the UI can show them without opening devtools.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<BrowserLogger> = OnceLock::new();

/// Fixed-size ring of formatted log lines (oldest dropped first)
#[derive(Debug)]
pub struct RollingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
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

/// Console logger with a rolling buffer
pub struct BrowserLogger {
    level: LevelFilter,
    buffer: Mutex<RollingBuffer>,
}

impl BrowserLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RollingBuffer::new(capacity)),
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer.lock().map(|b| b.lines()).unwrap_or_default()
    }
}

impl Log for BrowserLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(Utc::now(), record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Format a single log line: `HH:MM:SS.mmm LEVEL [target] message`
pub fn format_line(at: DateTime<Utc>, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", at.format("%H:%M:%S%.3f"), level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use web_sys::console;
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug => console::log_1(&value),
        Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the logger as the global `log` backend.
///
/// Calling it twice returns the error from `log::set_logger`.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| BrowserLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines captured by the installed logger (empty if not installed)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(BrowserLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rolling_buffer_drops_oldest() {
        let mut buffer = RollingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_rolling_buffer_zero_capacity_keeps_one() {
        let mut buffer = RollingBuffer::new(0);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_format_line() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 13, 4, 5).unwrap();
        let line = format_line(at, Level::Warn, "bookcompass::api", "slow response");
        assert_eq!(line, "13:04:05.000 WARN  [bookcompass::api] slow response");
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = BrowserLogger::new(LevelFilter::Info, 10);
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("t")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("t")
                .args(format_args!("shown"))
                .build(),
        );
        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].ends_with("[t] shown"));
    }
}
