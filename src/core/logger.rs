//! Main logger implementation

use super::{
    bridge_sink::BridgeSink,
    clock::{Clock, SystemClock},
    console_sink::{printer_for, ConsoleSink},
    dispatcher::BridgeDispatcher,
    duration::format_milliseconds,
    error::{stderr_error_callback, ErrorCallback, LoggerError},
    labels::LevelLabels,
    log_level::{name_to_level, LevelArg, LogLevel},
    log_record::NativeLogRecord,
    metrics::BridgeMetrics,
    options::LoggerOptions,
    platform::{HostPlatform, Platform},
    timer::{TimerKey, TimerTable},
};
use crate::sinks::{NoopBridge, StdConsole};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Where formatted output goes, chosen once when the logger is built.
enum SinkRoute {
    Bridge(BridgeDispatcher),
    Console(Arc<dyn ConsoleSink>),
}

/// A tagged, leveled logger.
///
/// On a native runtime every message becomes a [`NativeLogRecord`] sent to
/// the bridge; otherwise it is formatted as a line and printed through the
/// console sink method matching its level. No method returns an error:
/// invalid settings are ignored and delivery failures go to the error
/// callback.
///
/// # Example
///
/// ```
/// use tagged_logger::prelude::*;
///
/// let mut logger = Logger::new("Auth");
/// logger.set_level("debug");
/// logger.debug("token refreshed");
/// logger.warn("session about to expire");
/// ```
pub struct Logger {
    level: LogLevel,
    tag: String,
    labels: LevelLabels,
    use_syslog: bool,
    timers: TimerTable,
    route: SinkRoute,
    platform: Arc<dyn Platform>,
    clock: Arc<dyn Clock>,
    on_error: ErrorCallback,
}

impl Logger {
    /// Create a logger for the host environment with default settings.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self::builder(tag).build()
    }

    /// Create a logger for the host environment with the given options.
    #[must_use]
    pub fn with_options(tag: impl Into<String>, options: LoggerOptions) -> Self {
        Self::builder(tag).options(options).build()
    }

    #[must_use]
    pub fn builder(tag: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(tag)
    }

    /// The current threshold.
    ///
    /// Ordinals above `debug` are stored as `debug`, so after
    /// `set_level(7u8)` this returns [`LogLevel::Debug`]. Filtering is the
    /// same as for the raw ordinal.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Set the threshold from a level, an ordinal or a name.
    ///
    /// Unknown names are ignored. Ordinals above `debug` act as `debug`.
    pub fn set_level<'a>(&mut self, level: impl Into<LevelArg<'a>>) {
        if let Some(level) = level.into().resolve() {
            self.level = level;
        }
    }

    pub fn level_name(&self) -> &'static str {
        self.level.to_str()
    }

    pub fn set_level_name(&mut self, name: &str) {
        if let Some(level) = name_to_level(name) {
            self.level = level;
        }
    }

    pub fn level_with_name(&self, name: &str) -> Option<LogLevel> {
        name_to_level(name)
    }

    /// A copy of the current labels.
    pub fn labels(&self) -> LevelLabels {
        self.labels.clone()
    }

    /// Merge labels by level name. Existing labels for other levels stay.
    pub fn set_labels<I, K, V>(&mut self, labels: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.labels.merge(labels);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Empty tags are ignored.
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !tag.is_empty() {
            self.tag = tag;
        }
    }

    pub fn use_syslog(&self) -> bool {
        self.use_syslog
    }

    /// Update the flag and, on iOS, tell the native side.
    pub fn set_use_syslog(&mut self, use_syslog: bool) {
        self.use_syslog = use_syslog;
        if !self.platform.supports_syslog() {
            return;
        }
        if let SinkRoute::Bridge(ref dispatcher) = self.route {
            dispatcher.set_use_syslog(use_syslog);
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self.route, SinkRoute::Bridge(_))
    }

    pub fn platform_name(&self) -> &str {
        self.platform.platform_name()
    }

    /// Does nothing. Lets callers pick a method by level name without
    /// special-casing `silent`.
    #[inline]
    pub fn silent(&self, _message: impl Into<String>) {}

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Error, &self.tag, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Warn, &self.tag, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Info, &self.tag, message);
    }

    /// Same as [`Logger::info`].
    #[inline]
    pub fn log(&self, message: impl Into<String>) {
        self.info(message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log_message(LogLevel::Debug, &self.tag, message);
    }

    pub fn log_at_level<'a>(&self, level: impl Into<LevelArg<'a>>, message: impl Into<String>) {
        self.log_with_tag_at_level(level, &self.tag, message);
    }

    /// Log with a one-off tag. An unknown level name logs at `info`.
    pub fn log_with_tag_at_level<'a>(
        &self,
        level: impl Into<LevelArg<'a>>,
        tag: &str,
        message: impl Into<String>,
    ) {
        let level = level.into().resolve().unwrap_or(LogLevel::Info);
        if self.level.allows(level) {
            self.log_message(level, tag, message);
        }
    }

    /// Gate, label and deliver one message.
    pub fn log_message(&self, level: LogLevel, tag: &str, message: impl Into<String>) {
        if level == LogLevel::Silent || !self.level.allows(level) {
            return;
        }

        let label = self.labels.get(level).unwrap_or("");

        match self.route {
            SinkRoute::Bridge(ref dispatcher) => {
                dispatcher.send(NativeLogRecord::new(level, tag, label, message));
            }
            SinkRoute::Console(ref console) => {
                if let Some(print) = printer_for(level) {
                    let message = message.into();
                    print(&**console, &format_console_line(tag, label, &message));
                }
            }
        }
    }

    /// Show a value. Natively objects and arrays are logged as
    /// `"<type>: <pretty JSON>"` and anything else as compact JSON.
    pub fn dir<T: Serialize + ?Sized>(&self, value: &T) {
        if !self.level.allows(LogLevel::Info) {
            return;
        }

        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(e) => return self.report(&e.into()),
        };

        match self.route {
            SinkRoute::Console(ref console) => console.dir(&json),
            SinkRoute::Bridge(_) => match json {
                Value::Object(_) | Value::Array(_) => match serde_json::to_string_pretty(&json) {
                    Ok(pretty) => self.info(format!("{}: {}", short_type_name::<T>(), pretty)),
                    Err(e) => self.report(&e.into()),
                },
                scalar => self.info(scalar.to_string()),
            },
        }
    }

    pub fn clear(&self) {
        if let Some(console) = self.console() {
            console.clear();
        }
    }

    pub fn count(&self, label: Option<&str>) {
        if let Some(console) = self.console() {
            console.count(label);
        }
    }

    pub fn count_reset(&self, label: Option<&str>) {
        if let Some(console) = self.console() {
            console.count_reset(label);
        }
    }

    pub fn group(&self, labels: &[&str]) {
        if let Some(console) = self.console() {
            console.group(labels);
        }
    }

    pub fn group_collapsed(&self, labels: &[&str]) {
        if let Some(console) = self.console() {
            console.group_collapsed(labels);
        }
    }

    pub fn group_end(&self) {
        if let Some(console) = self.console() {
            console.group_end();
        }
    }

    pub fn table<T: Serialize + ?Sized>(&self, data: &T, columns: Option<&[&str]>) {
        let Some(console) = self.console() else {
            return;
        };
        match serde_json::to_value(data) {
            Ok(json) => console.table(&json, columns),
            Err(e) => self.report(&e.into()),
        }
    }

    /// Start (or restart) a timer. `None` and `""` select the default timer.
    pub fn time(&self, label: Option<&str>) {
        self.timers
            .start(TimerKey::resolve(label), self.clock.now_millis());
    }

    /// Log the elapsed time of a running timer at `info`.
    pub fn time_log(&self, label: Option<&str>) {
        let key = TimerKey::resolve(label);
        match self.timers.elapsed(&key, self.clock.now_millis()) {
            Some(elapsed) => self.info(format!("{}: {}", key, format_milliseconds(elapsed))),
            None => self.warn(format!("timer '{}' does not exist", key)),
        }
    }

    /// Log the elapsed time, then forget the timer.
    pub fn time_end(&self, label: Option<&str>) {
        self.time_log(label);
        self.timers.remove(&TimerKey::resolve(label));
    }

    pub fn has_timer(&self, label: Option<&str>) -> bool {
        self.timers.contains(&TimerKey::resolve(label))
    }

    /// Print the current call stack.
    pub fn trace(&self) {
        match self.route {
            SinkRoute::Console(ref console) => console.trace(),
            SinkRoute::Bridge(_) => {
                let backtrace = std::backtrace::Backtrace::force_capture().to_string();
                let stack = strip_error_header(&backtrace);
                let stack = if stack.trim().is_empty() {
                    "<no stack>"
                } else {
                    stack
                };
                self.info(format!("trace\n{}", stack));
            }
        }
    }

    /// Delivery counters, when logging through the bridge.
    pub fn bridge_metrics(&self) -> Option<&BridgeMetrics> {
        match self.route {
            SinkRoute::Bridge(ref dispatcher) => Some(dispatcher.metrics()),
            SinkRoute::Console(_) => None,
        }
    }

    /// Wait for queued bridge commands. Always `true` for console output.
    pub fn flush(&self, timeout: Duration) -> bool {
        match self.route {
            SinkRoute::Bridge(ref dispatcher) => dispatcher.flush(timeout),
            SinkRoute::Console(_) => true,
        }
    }

    /// Drain and stop the bridge worker, if there is one.
    ///
    /// Dropping the logger does the same with
    /// [`DEFAULT_SHUTDOWN_TIMEOUT`](super::dispatcher::DEFAULT_SHUTDOWN_TIMEOUT).
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        match self.route {
            SinkRoute::Bridge(ref mut dispatcher) => dispatcher.shutdown(timeout),
            SinkRoute::Console(_) => true,
        }
    }

    fn console(&self) -> Option<&dyn ConsoleSink> {
        match self.route {
            SinkRoute::Console(ref console) => Some(&**console),
            SinkRoute::Bridge(_) => None,
        }
    }

    fn report(&self, error: &LoggerError) {
        (self.on_error)(error);
    }

    fn apply_options(&mut self, options: &LoggerOptions) {
        if let Some(ordinal) = options.level {
            self.level = LogLevel::saturating_from_ordinal(ordinal);
        }
        if let Some(ref labels) = options.labels {
            self.labels.merge(labels);
        }
        if let Some(use_syslog) = options.use_syslog {
            self.use_syslog = use_syslog;
        }
    }
}

/// Format a console line. An ASCII-leading label follows the tag; any
/// other label (an emoji, say) precedes it.
///
/// ```
/// use tagged_logger::core::format_console_line;
///
/// assert_eq!(format_console_line("Net", "", "up"), "[Net]: up");
/// assert_eq!(format_console_line("Net", "WARN", "slow"), "[Net] WARN: slow");
/// assert_eq!(format_console_line("Net", "🟠", "slow"), "🟠 [Net]: slow");
/// ```
pub fn format_console_line(tag: &str, label: &str, message: &str) -> String {
    match label.chars().next() {
        None => format!("[{}]: {}", tag, message),
        Some(first) if first.is_ascii() => format!("[{}] {}: {}", tag, label, message),
        Some(_) => format!("{} [{}]: {}", label, tag, message),
    }
}

/// Drop a leading `Error...` header line from captured stack text.
/// A header without a following newline is kept.
fn strip_error_header(stack: &str) -> &str {
    let trimmed = stack.trim_start();
    if !trimmed.starts_with("Error") {
        return stack;
    }
    match trimmed.find('\n') {
        Some(newline) => &trimmed[newline + 1..],
        None => stack,
    }
}

/// `alloc::vec::Vec<u8>` becomes `Vec`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use tagged_logger::prelude::*;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let bridge = Arc::new(MemoryBridge::new());
/// let logger = Logger::builder("Sync")
///     .level(LogLevel::Debug)
///     .label("warn", "WARN")
///     .platform(StaticPlatform::android())
///     .bridge(bridge.clone())
///     .build();
///
/// logger.warn("retrying");
/// logger.flush(Duration::from_secs(1));
/// assert_eq!(bridge.records()[0].label, "WARN");
/// ```
pub struct LoggerBuilder {
    tag: String,
    base_labels: LevelLabels,
    options: LoggerOptions,
    bridge: Option<Arc<dyn BridgeSink>>,
    console: Option<Arc<dyn ConsoleSink>>,
    platform: Option<Arc<dyn Platform>>,
    clock: Option<Arc<dyn Clock>>,
    inline_bridge: bool,
    on_error: Option<ErrorCallback>,
}

impl LoggerBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            base_labels: LevelLabels::default(),
            options: LoggerOptions::default(),
            bridge: None,
            console: None,
            platform: None,
            clock: None,
            inline_bridge: false,
            on_error: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.options.level = Some(level.ordinal());
        self
    }

    /// Labels to start from before any label settings are merged in.
    /// Defaults to [`LevelLabels::default`].
    #[must_use = "builder methods return a new value"]
    pub fn default_labels(mut self, labels: LevelLabels) -> Self {
        self.base_labels = labels;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn label(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.options = self.options.label(name, label);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn labels<I, K, V>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, label) in labels {
            self.options = self.options.label(name, label);
        }
        self
    }

    /// Initial syslog flag. Does not call the bridge.
    #[must_use = "builder methods return a new value"]
    pub fn use_syslog(mut self, use_syslog: bool) -> Self {
        self.options.use_syslog = Some(use_syslog);
        self
    }

    /// Apply options; fields they leave unset keep their current value.
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        if options.level.is_some() {
            self.options.level = options.level;
        }
        if let Some(labels) = options.labels {
            for (name, label) in labels {
                self.options = self.options.label(name, label);
            }
        }
        if options.use_syslog.is_some() {
            self.options.use_syslog = options.use_syslog;
        }
        self
    }

    /// Native bridge. Defaults to [`NoopBridge`].
    #[must_use = "builder methods return a new value"]
    pub fn bridge(mut self, bridge: Arc<dyn BridgeSink>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// Console sink. Defaults to [`StdConsole`].
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: Arc<dyn ConsoleSink>) -> Self {
        self.console = Some(console);
        self
    }

    /// Platform detection. Defaults to [`HostPlatform`].
    #[must_use = "builder methods return a new value"]
    pub fn platform<P: Platform + 'static>(mut self, platform: P) -> Self {
        self.platform = Some(Arc::new(platform));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Call the bridge on the logging thread instead of the background
    /// worker. Only for bridges whose calls just enqueue, such as
    /// `TokioBridge` or an in-memory recorder.
    #[must_use = "builder methods return a new value"]
    pub fn inline_bridge(mut self) -> Self {
        self.inline_bridge = true;
        self
    }

    /// Where absorbed failures are reported. Defaults to stderr.
    #[must_use = "builder methods return a new value"]
    pub fn on_error(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    pub fn build(self) -> Logger {
        let platform = self
            .platform
            .unwrap_or_else(|| Arc::new(HostPlatform) as Arc<dyn Platform>);
        let on_error = self.on_error.unwrap_or_else(stderr_error_callback);

        let route = if platform.is_native_runtime() {
            let bridge = self
                .bridge
                .unwrap_or_else(|| Arc::new(NoopBridge) as Arc<dyn BridgeSink>);
            let dispatcher = if self.inline_bridge {
                BridgeDispatcher::inline(bridge, Arc::clone(&on_error))
            } else {
                BridgeDispatcher::with_worker(bridge, Arc::clone(&on_error))
            };
            SinkRoute::Bridge(dispatcher)
        } else {
            SinkRoute::Console(
                self.console
                    .unwrap_or_else(|| Arc::new(StdConsole::new()) as Arc<dyn ConsoleSink>),
            )
        };

        let mut logger = Logger {
            level: LogLevel::Info,
            tag: self.tag,
            labels: self.base_labels,
            use_syslog: false,
            timers: TimerTable::new(),
            route,
            platform,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>),
            on_error,
        };
        logger.apply_options(&self.options);
        logger
    }
}
