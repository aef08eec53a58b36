//! # Tagged Logger
//!
//! One tagged, leveled logging API whose output adapts to the runtime.
//!
//! ## Features
//!
//! - **Native bridge**: on iOS and Android every message becomes a structured
//!   record handed to a platform bridge from a background thread
//! - **Console output**: elsewhere messages are formatted with the tag and a
//!   per-level label and printed through a console sink
//! - **Console parity**: timers, counters, groups, tables, `dir` and `trace`
//! - **Never fails the caller**: bad settings are ignored, delivery failures
//!   are reported on an error channel

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        BridgeMetrics, BridgeSink, Clock, ConsoleSink, ErrorCallback, HostPlatform, LevelArg,
        LevelLabels, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerOptions,
        NativeLogRecord, Platform, Result, StaticPlatform, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::sinks::{
        ConsoleEvent, MemoryBridge, MemoryConsole, NoopBridge, NoopConsole, StdConsole,
    };
}

pub use crate::core::{
    BridgeMetrics, BridgeSink, Clock, ConsoleSink, ErrorCallback, HostPlatform, LevelArg,
    LevelLabels, LogLevel, Logger, LoggerBuilder, LoggerError, LoggerOptions, NativeLogRecord,
    Platform, Result, StaticPlatform, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use crate::sinks::{MemoryBridge, MemoryConsole, NoopBridge, NoopConsole, StdConsole};
