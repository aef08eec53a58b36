//! The structured record handed to the native bridge

use super::log_level::{self, LogLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeLogRecord {
    #[serde(with = "log_level::ordinal")]
    pub level: LogLevel,
    pub tag: String,
    pub label: String,
    pub message: String,
}

impl NativeLogRecord {
    pub fn new(
        level: LogLevel,
        tag: impl Into<String>,
        label: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            tag: tag.into(),
            label: label.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_travels_as_ordinal() {
        let record = NativeLogRecord::new(LogLevel::Warn, "Net", "🟠", "slow response");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["level"], 2);
        assert_eq!(json["tag"], "Net");
        assert_eq!(json["message"], "slow response");

        let back: NativeLogRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
