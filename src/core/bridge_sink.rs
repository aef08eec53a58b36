//! Bridge trait for the native log facility

use super::{error::Result, log_record::NativeLogRecord};

/// The native side of the logger.
///
/// Both calls may fail; the logger reports failures on its error channel
/// and never surfaces them to the code that logged.
pub trait BridgeSink: Send + Sync {
    fn send(&self, record: &NativeLogRecord) -> Result<()>;

    /// Only meaningful on platforms with a syslog-style facility.
    fn set_use_syslog(&self, use_syslog: bool) -> Result<()>;

    fn name(&self) -> &str;
}
