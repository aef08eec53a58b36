//! Per-level display labels

use super::log_level::{name_to_level, LogLevel, ACTIVE_LEVELS};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Labels for the levels that emit output.
///
/// `silent` never has a label. Updates are merges: only the named levels
/// change, and invalid names or empty labels are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLabels {
    labels: BTreeMap<LogLevel, String>,
}

impl LevelLabels {
    pub const DEFAULT_ERROR: &'static str = "🔴";
    pub const DEFAULT_WARN: &'static str = "🟠";
    pub const DEFAULT_INFO: &'static str = "🟢";
    pub const DEFAULT_DEBUG: &'static str = "🔎";

    /// A map with no labels at all.
    pub fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    pub fn get(&self, level: LogLevel) -> Option<&str> {
        self.labels.get(&level).map(String::as_str)
    }

    /// Set one label by level name. Returns whether anything changed.
    pub fn set(&mut self, name: &str, label: &str) -> bool {
        if label.is_empty() {
            return false;
        }
        match name_to_level(name) {
            Some(LogLevel::Silent) | None => false,
            Some(level) => {
                self.labels.insert(level, label.to_string());
                true
            }
        }
    }

    /// Apply every valid entry of `labels` on top of the current map.
    pub fn merge<I, K, V>(&mut self, labels: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, label) in labels {
            self.set(name.as_ref(), label.as_ref());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, &str)> {
        self.labels.iter().map(|(level, label)| (*level, label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for LevelLabels {
    fn default() -> Self {
        let defaults = [
            Self::DEFAULT_ERROR,
            Self::DEFAULT_WARN,
            Self::DEFAULT_INFO,
            Self::DEFAULT_DEBUG,
        ];
        Self {
            labels: ACTIVE_LEVELS
                .iter()
                .zip(defaults)
                .map(|(level, label)| (*level, label.to_string()))
                .collect(),
        }
    }
}

impl Serialize for LevelLabels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.labels.len()))?;
        for (level, label) in &self.labels {
            map.serialize_entry(level.to_str(), label)?;
        }
        map.end()
    }
}
