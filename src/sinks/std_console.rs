//! Terminal console sink

use crate::core::{ConsoleSink, LogLevel};
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;

const DEFAULT_COUNT_LABEL: &str = "default";
const INDENT: &str = "  ";

#[derive(Debug, Default)]
struct ConsoleState {
    depth: usize,
    counters: HashMap<String, u64>,
}

/// A console on stdout and stderr.
///
/// `error` and `warn` lines go to stderr, `info` and `debug` to stdout.
/// With the `console` feature, lines are colored by level.
#[derive(Debug)]
pub struct StdConsole {
    #[cfg(feature = "console")]
    use_colors: bool,
    state: Mutex<ConsoleState>,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "console")]
            use_colors: true,
            state: Mutex::new(ConsoleState::default()),
        }
    }

    #[cfg(feature = "console")]
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            state: Mutex::new(ConsoleState::default()),
        }
    }

    fn write(&self, level: LogLevel, text: &str) {
        let depth = self.state.lock().depth;
        let output = self.colorize(level, indent(text, depth));

        match level {
            LogLevel::Error | LogLevel::Warn => eprintln!("{}", output),
            _ => println!("{}", output),
        }
    }

    #[cfg(feature = "console")]
    fn colorize(&self, level: LogLevel, text: String) -> String {
        match level.color_code() {
            Some(color) if self.use_colors => text.color(color).to_string(),
            _ => text,
        }
    }

    #[cfg(not(feature = "console"))]
    fn colorize(&self, _level: LogLevel, text: String) -> String {
        text
    }

    fn open_group(&self, labels: &[&str]) {
        if !labels.is_empty() {
            self.write(LogLevel::Info, &labels.join(" "));
        }
        self.state.lock().depth += 1;
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink for StdConsole {
    fn error(&self, line: &str) {
        self.write(LogLevel::Error, line);
    }

    fn warn(&self, line: &str) {
        self.write(LogLevel::Warn, line);
    }

    fn info(&self, line: &str) {
        self.write(LogLevel::Info, line);
    }

    fn debug(&self, line: &str) {
        self.write(LogLevel::Debug, line);
    }

    fn dir(&self, value: &Value) {
        let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        self.write(LogLevel::Info, &text);
    }

    fn clear(&self) {
        print!("\x1B[2J\x1B[1;1H");
    }

    fn count(&self, label: Option<&str>) {
        let label = label.unwrap_or(DEFAULT_COUNT_LABEL);
        let count = {
            let mut state = self.state.lock();
            let counter = state.counters.entry(label.to_string()).or_insert(0);
            *counter += 1;
            *counter
        };
        self.write(LogLevel::Info, &format!("{}: {}", label, count));
    }

    fn count_reset(&self, label: Option<&str>) {
        let label = label.unwrap_or(DEFAULT_COUNT_LABEL);
        let existed = self.state.lock().counters.remove(label).is_some();
        if !existed {
            self.write(
                LogLevel::Warn,
                &format!("Count for '{}' does not exist", label),
            );
        }
    }

    fn group(&self, labels: &[&str]) {
        self.open_group(labels);
    }

    // A terminal cannot collapse, so this behaves like `group`.
    fn group_collapsed(&self, labels: &[&str]) {
        self.open_group(labels);
    }

    fn group_end(&self) {
        let mut state = self.state.lock();
        state.depth = state.depth.saturating_sub(1);
    }

    fn table(&self, data: &Value, columns: Option<&[&str]>) {
        match render_table(data, columns) {
            Some(table) => self.write(LogLevel::Info, &table),
            None => self.dir(data),
        }
    }

    fn trace(&self) {
        let backtrace = std::backtrace::Backtrace::force_capture();
        self.write(LogLevel::Debug, &format!("Trace\n{}", backtrace));
    }

    fn name(&self) -> &str {
        "std_console"
    }
}

fn indent(text: &str, depth: usize) -> String {
    if depth == 0 {
        return text.to_string();
    }
    let prefix = INDENT.repeat(depth);
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render an array or object of rows as an aligned text table.
///
/// Object rows contribute their keys as columns; scalar rows go in a
/// `Values` column. `columns` restricts the object columns shown.
/// Returns `None` for data that is not a collection.
pub(crate) fn render_table(data: &Value, columns: Option<&[&str]>) -> Option<String> {
    let rows: Vec<(String, &Value)> = match data {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, row)| (index.to_string(), row))
            .collect(),
        Value::Object(map) => map.iter().map(|(key, row)| (key.clone(), row)).collect(),
        _ => return None,
    };

    let mut keys: Vec<String> = Vec::new();
    let mut has_scalars = false;
    for (_, row) in &rows {
        match row {
            Value::Object(fields) => {
                for key in fields.keys() {
                    if !keys.contains(key) {
                        keys.push(key.clone());
                    }
                }
            }
            _ => has_scalars = true,
        }
    }
    if let Some(selected) = columns {
        keys = selected.iter().map(|column| column.to_string()).collect();
    }

    let mut header = vec!["(index)".to_string()];
    header.extend(keys.iter().cloned());
    if has_scalars {
        header.push("Values".to_string());
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|(index, row)| {
            let mut cells = vec![index.clone()];
            for key in &keys {
                cells.push(row.get(key.as_str()).map(cell_text).unwrap_or_default());
            }
            if has_scalars {
                cells.push(match row {
                    Value::Object(_) => String::new(),
                    scalar => cell_text(scalar),
                });
            }
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|column| {
            std::iter::once(&header)
                .chain(body.iter())
                .map(|cells| cells[column].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let separator = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![format_row(&header), separator];
    lines.extend(body.iter().map(|cells| format_row(cells)));
    Some(lines.join("\n"))
}
