//! Sink implementations

pub mod memory;
pub mod noop;
pub mod std_console;

#[cfg(feature = "async-bridge")]
pub mod tokio_bridge;

pub use memory::{ConsoleEvent, MemoryBridge, MemoryConsole};
pub use noop::{NoopBridge, NoopConsole};
pub use std_console::StdConsole;

#[cfg(feature = "async-bridge")]
pub use tokio_bridge::{AsyncBridgeSink, TokioBridge};

pub use crate::core::{BridgeSink, ConsoleSink};
