//! Capturing sinks
//!
//! Keep everything they receive so application tests can assert on what
//! was logged.

use crate::core::{BridgeSink, ConsoleSink, LogLevel, LoggerError, NativeLogRecord, Result};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};

/// One call received by a [`MemoryConsole`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEvent {
    Print { level: LogLevel, line: String },
    Dir(Value),
    Clear,
    Count(Option<String>),
    CountReset(Option<String>),
    Group(Vec<String>),
    GroupCollapsed(Vec<String>),
    GroupEnd,
    Table { data: Value, columns: Option<Vec<String>> },
    Trace,
}

#[derive(Debug, Default)]
pub struct MemoryConsole {
    events: Mutex<Vec<ConsoleEvent>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.events.lock().clone()
    }

    /// Printed lines with the level they were printed at.
    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Print { level, line } => Some((*level, line.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn take_events(&self) -> Vec<ConsoleEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    fn push(&self, event: ConsoleEvent) {
        self.events.lock().push(event);
    }

    fn print(&self, level: LogLevel, line: &str) {
        self.push(ConsoleEvent::Print {
            level,
            line: line.to_string(),
        });
    }
}

fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

impl ConsoleSink for MemoryConsole {
    fn error(&self, line: &str) {
        self.print(LogLevel::Error, line);
    }

    fn warn(&self, line: &str) {
        self.print(LogLevel::Warn, line);
    }

    fn info(&self, line: &str) {
        self.print(LogLevel::Info, line);
    }

    fn debug(&self, line: &str) {
        self.print(LogLevel::Debug, line);
    }

    fn dir(&self, value: &Value) {
        self.push(ConsoleEvent::Dir(value.clone()));
    }

    fn clear(&self) {
        self.push(ConsoleEvent::Clear);
    }

    fn count(&self, label: Option<&str>) {
        self.push(ConsoleEvent::Count(label.map(String::from)));
    }

    fn count_reset(&self, label: Option<&str>) {
        self.push(ConsoleEvent::CountReset(label.map(String::from)));
    }

    fn group(&self, labels: &[&str]) {
        self.push(ConsoleEvent::Group(owned(labels)));
    }

    fn group_collapsed(&self, labels: &[&str]) {
        self.push(ConsoleEvent::GroupCollapsed(owned(labels)));
    }

    fn group_end(&self) {
        self.push(ConsoleEvent::GroupEnd);
    }

    fn table(&self, data: &Value, columns: Option<&[&str]>) {
        self.push(ConsoleEvent::Table {
            data: data.clone(),
            columns: columns.map(owned),
        });
    }

    fn trace(&self) {
        self.push(ConsoleEvent::Trace);
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// A bridge that records what it is sent, and can be told to fail.
#[derive(Debug, Default)]
pub struct MemoryBridge {
    records: Mutex<Vec<NativeLogRecord>>,
    syslog_calls: Mutex<Vec<bool>>,
    failing: AtomicBool,
}

impl MemoryBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// While set, every call is rejected and nothing is recorded.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<NativeLogRecord> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    pub fn syslog_calls(&self) -> Vec<bool> {
        self.syslog_calls.lock().clone()
    }

    fn check(&self, operation: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(LoggerError::bridge_rejected(operation, "memory bridge set to fail"))
        } else {
            Ok(())
        }
    }
}

impl BridgeSink for MemoryBridge {
    fn send(&self, record: &NativeLogRecord) -> Result<()> {
        self.check("send")?;
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn set_use_syslog(&self, use_syslog: bool) -> Result<()> {
        self.check("setUseSyslog")?;
        self.syslog_calls.lock().push(use_syslog);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
