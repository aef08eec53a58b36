//! Logging macros for ergonomic message formatting.
//!
//! These macros format their arguments like `format!` and hand the result
//! to the logger.
//!
//! # Examples
//!
//! ```
//! use tagged_logger::prelude::*;
//! use tagged_logger::info;
//!
//! let logger = Logger::new("Server");
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Listening on port {}", port);
//! ```

/// Log a formatted message at a level given as a level, ordinal or name.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("App");
/// use tagged_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, "warn", "Status code: {}", 503);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at_level($level, format!($($arg)+))
    };
}

/// Log a formatted message with a one-off tag.
///
/// # Examples
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("App");
/// use tagged_logger::tagged;
/// tagged!(logger, LogLevel::Warn, "Cache", "{} entries evicted", 12);
/// ```
#[macro_export]
macro_rules! tagged {
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)+) => {
        $logger.log_with_tag_at_level($level, $tag, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("App");
/// use tagged_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("App");
/// use tagged_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("App");
/// use tagged_logger::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use tagged_logger::prelude::*;
/// # let logger = Logger::new("App");
/// use tagged_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
