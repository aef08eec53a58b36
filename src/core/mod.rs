//! Core logger types and traits

pub mod bridge_sink;
pub mod clock;
pub mod console_sink;
pub mod dispatcher;
pub mod duration;
pub mod error;
pub mod labels;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod platform;
pub mod timer;

pub use bridge_sink::BridgeSink;
pub use clock::{Clock, SystemClock};
pub use console_sink::{printer_for, ConsoleSink, PrintFn};
pub use dispatcher::{BridgeDispatcher, DEFAULT_SHUTDOWN_TIMEOUT};
pub use duration::format_milliseconds;
pub use error::{ErrorCallback, LoggerError, Result};
pub use labels::LevelLabels;
pub use log_level::{level_to_name, name_to_level, LevelArg, LogLevel};
pub use log_record::NativeLogRecord;
pub use logger::{format_console_line, Logger, LoggerBuilder};
pub use metrics::BridgeMetrics;
pub use options::LoggerOptions;
pub use platform::{HostPlatform, Platform, StaticPlatform};
pub use timer::TimerKey;
