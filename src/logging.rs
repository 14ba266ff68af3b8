//! Logging sink owned by the surrounding build framework.
//!
//! The runner never prints directly; it hands categorized single- or
//! multi-line messages to a [`TaskLog`] sink. The default sink routes to the
//! `log` facade, so a host pipeline controls formatting and filtering.

use std::sync::{Mutex, PoisonError};

/// Message category accepted by a [`TaskLog`] sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

/// Categorized logging sink.
pub trait TaskLog: Send + Sync {
    fn write(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.write(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }
}

/// Sink that forwards messages to the `log` facade macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvLog;

impl TaskLog for EnvLog {
    fn write(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => log::info!("{message}"),
            LogLevel::Warning => log::warn!("{message}"),
            LogLevel::Error => log::error!("{message}"),
        }
    }
}

/// Sink that records every message in memory.
///
/// Used by embedders that post-process task output, and by tests to assert on
/// exactly which blocks were emitted.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries in emission order.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages recorded at the given level, in emission order.
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl TaskLog for MemoryLog {
    fn write(&self, level: LogLevel, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_log_records_in_order() {
        let log = MemoryLog::new();
        log.info("one");
        log.warning("two");
        log.error("three");

        assert_eq!(
            log.entries(),
            vec![
                (LogLevel::Info, "one".to_string()),
                (LogLevel::Warning, "two".to_string()),
                (LogLevel::Error, "three".to_string()),
            ]
        );
        assert_eq!(log.messages_at(LogLevel::Warning), vec!["two".to_string()]);
    }
}
