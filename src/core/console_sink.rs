//! Console trait for console-backed environments

use super::log_level::LogLevel;
use serde_json::Value;

/// A console-style output sink.
///
/// The four print operations receive fully formatted lines. The utility
/// operations mirror a conventional console API and default to no-ops for
/// environments without such a facility.
pub trait ConsoleSink: Send + Sync {
    fn error(&self, line: &str);
    fn warn(&self, line: &str);
    fn info(&self, line: &str);
    fn debug(&self, line: &str);

    fn dir(&self, _value: &Value) {}
    fn clear(&self) {}
    fn count(&self, _label: Option<&str>) {}
    fn count_reset(&self, _label: Option<&str>) {}
    fn group(&self, _labels: &[&str]) {}
    fn group_collapsed(&self, _labels: &[&str]) {}
    fn group_end(&self) {}
    fn table(&self, _data: &Value, _columns: Option<&[&str]>) {}
    fn trace(&self) {}

    fn name(&self) -> &str;
}

/// A console print operation.
pub type PrintFn = fn(&dyn ConsoleSink, &str);

fn print_error(console: &dyn ConsoleSink, line: &str) {
    console.error(line);
}

fn print_warn(console: &dyn ConsoleSink, line: &str) {
    console.warn(line);
}

fn print_info(console: &dyn ConsoleSink, line: &str) {
    console.info(line);
}

fn print_debug(console: &dyn ConsoleSink, line: &str) {
    console.debug(line);
}

/// Print operations indexed by level ordinal. `silent` has none.
const PRINTERS: [Option<PrintFn>; 5] = [
    None,
    Some(print_error),
    Some(print_warn),
    Some(print_info),
    Some(print_debug),
];

/// The console operation that prints lines for `level`.
#[inline]
pub fn printer_for(level: LogLevel) -> Option<PrintFn> {
    PRINTERS[level.ordinal() as usize]
}
