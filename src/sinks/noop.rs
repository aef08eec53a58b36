//! Sinks that discard everything

use crate::core::{BridgeSink, ConsoleSink, NativeLogRecord, Result};

/// The bridge registered where no native side exists. Accepts every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBridge;

impl BridgeSink for NoopBridge {
    fn send(&self, _record: &NativeLogRecord) -> Result<()> {
        Ok(())
    }

    fn set_use_syslog(&self, _use_syslog: bool) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "noop"
    }
}

/// A console with nowhere to print.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConsole;

impl ConsoleSink for NoopConsole {
    fn error(&self, _line: &str) {}
    fn warn(&self, _line: &str) {}
    fn info(&self, _line: &str) {}
    fn debug(&self, _line: &str) {}

    fn name(&self) -> &str {
        "noop"
    }
}
