//! In-app event log with levels and timestamps.
//!
//! Records user commands and fault transitions for the SESSION page, and can
//! be exported as JSON when the dashboard exits. Process diagnostics go
//! through the `log` facade instead; this buffer is what the operator sees.
//!
//! # Log Levels
//!
//! - `Trace`: Dark gray - verbose debugging
//! - `Debug`: Gray - debugging information
//! - `Info`: Green - normal operation
//! - `Warn`: Amber - problem set changed
//! - `Error`: Red - errors

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Local};
use embedded_graphics::pixelcolor::Rgb565;
use heapless::{Deque, String};
use serde::Serialize;

use crate::colors::{AMBER, DARK_GRAY, GREEN, MID_GRAY, RED};
use crate::config::EVENT_LOG_CAPACITY;
use crate::error::Result;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 48;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Verbose debugging (dark gray)
    Trace,
    /// Debug information (gray)
    Debug,
    /// Normal operation (green)
    #[default]
    Info,
    /// Warnings (amber)
    Warn,
    /// Errors (red)
    Error,
}

impl LogLevel {
    /// Get the display color for this log level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace => DARK_GRAY,
            Self::Debug => MID_GRAY,
            Self::Info => GREEN,
            Self::Warn => AMBER,
            Self::Error => RED,
        }
    }

    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and timestamps.
#[derive(Clone, Debug)]
pub struct LogEntry {
    /// Log severity level.
    pub level: LogLevel,
    /// Log message (truncated to `LOG_MSG_LEN - 1` characters).
    pub message: String<LOG_MSG_LEN>,
    /// Wall-clock time of the event.
    pub timestamp: DateTime<Local>,
    /// Seconds since the log was created.
    pub elapsed_s: f64,
}

impl LogEntry {
    /// Create a new log entry, truncating `message` to fit.
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp: DateTime<Local>,
        elapsed_s: f64,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for (i, c) in message.chars().enumerate() {
            if i >= LOG_MSG_LEN - 1 {
                break;
            }
            // Multi-byte characters can overflow the byte capacity early.
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            timestamp,
            elapsed_s,
        }
    }
}

/// Borrowed JSON view of one entry.
#[derive(Serialize)]
struct ExportEntry<'a> {
    level: LogLevel,
    message: &'a str,
    timestamp: std::string::String,
    elapsed_s: f64,
}

/// Ring buffer of the most recent [`EVENT_LOG_CAPACITY`] events.
#[derive(Clone, Debug)]
pub struct DebugLog {
    entries: Deque<LogEntry, EVENT_LOG_CAPACITY>,
    started: Instant,
}

impl DebugLog {
    /// Create a new empty log; elapsed times count from now.
    pub fn new() -> Self {
        Self {
            entries: Deque::new(),
            started: Instant::now(),
        }
    }

    /// Push a message. If the buffer is full, the oldest entry is dropped.
    pub fn push(
        &mut self,
        level: LogLevel,
        message: &str,
    ) {
        let entry = LogEntry::new(level, message, Local::now(), self.started.elapsed().as_secs_f64());
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        // Cannot fail: a slot was freed above.
        self.entries.push_back(entry).ok();
    }

    /// Shorthand for an `Info` entry.
    #[inline]
    pub fn info(
        &mut self,
        message: &str,
    ) {
        self.push(LogLevel::Info, message);
    }

    /// Shorthand for a `Warn` entry.
    #[inline]
    pub fn warn(
        &mut self,
        message: &str,
    ) {
        self.push(LogLevel::Warn, message);
    }

    /// Iterate over entries (oldest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The last `n` entries, oldest first.
    pub fn tail(
        &self,
        n: usize,
    ) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    /// Get number of log entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize all entries as a pretty-printed JSON array into `writer`.
    pub fn write_json<W: Write>(
        &self,
        writer: W,
    ) -> Result<()> {
        let export: Vec<ExportEntry<'_>> = self
            .entries
            .iter()
            .map(|entry| ExportEntry {
                level: entry.level,
                message: entry.message.as_str(),
                timestamp: entry.timestamp.to_rfc3339(),
                elapsed_s: entry.elapsed_s,
            })
            .collect();
        serde_json::to_writer_pretty(writer, &export)?;
        Ok(())
    }

    /// Write all entries to `path` as JSON.
    pub fn export_json(
        &self,
        path: &Path,
    ) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.info("Test message");
        assert_eq!(log.len(), 1);

        log.warn("Another message");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().last().map(|e| e.level), Some(LogLevel::Warn));
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();
        for i in 0..EVENT_LOG_CAPACITY {
            log.info(&format!("Message {i}"));
        }
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);

        // One more drops the oldest
        log.info("New message");
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
        let first = log.iter().next().unwrap();
        assert_eq!(first.message.as_str(), "Message 1");
    }

    #[test]
    fn test_tail() {
        let mut log = DebugLog::new();
        for msg in ["a", "b", "c", "d"] {
            log.info(msg);
        }
        let tail: Vec<&str> = log.tail(2).map(|e| e.message.as_str()).collect();
        assert_eq!(tail, ["c", "d"]);
        assert_eq!(log.tail(10).count(), 4, "tail larger than log yields everything");
    }

    #[test]
    fn test_message_truncation() {
        let long_msg = "This is a very long message that exceeds the maximum line length limit";
        let entry = LogEntry::new(LogLevel::Info, long_msg, Local::now(), 0.0);
        assert_eq!(entry.message.len(), LOG_MSG_LEN - 1);
        assert!(long_msg.starts_with(entry.message.as_str()));
    }

    #[test]
    fn test_multibyte_truncation_never_splits() {
        let entry = LogEntry::new(LogLevel::Info, &"é".repeat(40), Local::now(), 0.0);
        assert!(entry.message.chars().all(|c| c == 'é'));
        assert!(entry.message.len() <= LOG_MSG_LEN);
    }

    #[test]
    fn test_level_prefix_and_color() {
        assert_eq!(LogLevel::Warn.prefix(), 'W');
        assert_eq!(LogLevel::Error.color(), RED);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_write_json() {
        let mut log = DebugLog::new();
        log.info("mode -> HOT");
        log.warn("OTP Rail A");

        let mut out = Vec::new();
        log.write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["level"], "INFO");
        assert_eq!(entries[1]["level"], "WARN");
        assert_eq!(entries[1]["message"], "OTP Rail A");
        assert!(entries[0]["timestamp"].is_string());
    }

    #[test]
    fn test_export_json_to_file() {
        let mut log = DebugLog::new();
        log.info("exported");
        let path = std::env::temp_dir().join(format!("lps-log-{}.json", std::process::id()));
        log.export_json(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert!(text.contains("exported"));
    }
}
