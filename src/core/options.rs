//! Construction options

use super::error::Result;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Optional settings applied when a logger is created.
///
/// `level` is an ordinal, never a name. `labels` is merged onto the
/// default labels. `use_syslog` only sets the initial flag; it does not
/// reach the bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_syslog: Option<bool>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level.ordinal());
        self
    }

    #[must_use]
    pub fn label(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), label.into());
        self
    }

    #[must_use]
    pub fn use_syslog(mut self, use_syslog: bool) -> Self {
        self.use_syslog = Some(use_syslog);
        self
    }

    /// Read options from loosely typed JSON.
    ///
    /// A field of the wrong type is ignored rather than rejected: `level`
    /// must be a non-negative integer, `labels` an object (non-string
    /// values are skipped), `useSyslog` a boolean. Anything other than an
    /// object yields empty options.
    pub fn from_json_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let level = object
            .get("level")
            .and_then(Value::as_u64)
            .map(|ordinal| ordinal.min(u8::MAX as u64) as u8);

        let labels = object.get("labels").and_then(Value::as_object).map(|map| {
            map.iter()
                .filter_map(|(name, label)| label.as_str().map(|l| (name.clone(), l.to_string())))
                .collect()
        });

        let use_syslog = object.get("useSyslog").and_then(Value::as_bool);

        Self {
            level,
            labels,
            use_syslog,
        }
    }

    /// Parse JSON text, then apply [`LoggerOptions::from_json_value`].
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json_value(&value))
    }
}
