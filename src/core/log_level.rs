//! Log level definitions and the level name registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity levels, ordered from quietest to most verbose.
///
/// A message at level `L` is shown when the active level is `>= L`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Silent = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
}

/// Every level in ordinal order.
pub const ALL_LEVELS: [LogLevel; 5] = [
    LogLevel::Silent,
    LogLevel::Error,
    LogLevel::Warn,
    LogLevel::Info,
    LogLevel::Debug,
];

/// The levels that can actually emit output.
pub const ACTIVE_LEVELS: [LogLevel; 4] = [
    LogLevel::Error,
    LogLevel::Warn,
    LogLevel::Info,
    LogLevel::Debug,
];

const LEVEL_NAMES: [&str; 5] = ["silent", "error", "warn", "info", "debug"];

/// Look up a level by its exact (case-sensitive) name.
pub fn name_to_level(name: &str) -> Option<LogLevel> {
    LEVEL_NAMES
        .iter()
        .position(|candidate| *candidate == name)
        .map(|index| ALL_LEVELS[index])
}

/// The registry name of a level.
pub fn level_to_name(level: LogLevel) -> &'static str {
    LEVEL_NAMES[level.ordinal() as usize]
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        level_to_name(*self)
    }

    #[inline]
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        ALL_LEVELS.get(ordinal as usize).copied()
    }

    /// Ordinals above `Debug` are clamped, which keeps the gate behavior of
    /// an out-of-range threshold (everything is shown).
    pub fn saturating_from_ordinal(ordinal: u8) -> Self {
        Self::from_ordinal(ordinal).unwrap_or(LogLevel::Debug)
    }

    /// Whether a message at `level` passes this threshold.
    #[inline]
    pub fn allows(&self, level: LogLevel) -> bool {
        *self >= level
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            LogLevel::Silent => None,
            LogLevel::Error => Some(Red),
            LogLevel::Warn => Some(Yellow),
            LogLevel::Info => Some(Green),
            LogLevel::Debug => Some(BrightBlack),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        name_to_level(s).ok_or_else(|| format!("Invalid log level: '{}'", s))
    }
}

/// A level given either as a level, a raw ordinal, or a registry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelArg<'a> {
    Level(LogLevel),
    Ordinal(u8),
    Name(&'a str),
}

impl LevelArg<'_> {
    /// Resolve to a level. Unknown names yield `None`.
    pub fn resolve(self) -> Option<LogLevel> {
        match self {
            LevelArg::Level(level) => Some(level),
            LevelArg::Ordinal(ordinal) => Some(LogLevel::saturating_from_ordinal(ordinal)),
            LevelArg::Name(name) => name_to_level(name),
        }
    }
}

impl From<LogLevel> for LevelArg<'_> {
    fn from(level: LogLevel) -> Self {
        LevelArg::Level(level)
    }
}

impl From<u8> for LevelArg<'_> {
    fn from(ordinal: u8) -> Self {
        LevelArg::Ordinal(ordinal)
    }
}

impl<'a> From<&'a str> for LevelArg<'a> {
    fn from(name: &'a str) -> Self {
        LevelArg::Name(name)
    }
}

impl<'a> From<&'a String> for LevelArg<'a> {
    fn from(name: &'a String) -> Self {
        LevelArg::Name(name.as_str())
    }
}

/// Serde helpers that encode a level as its ordinal.
pub mod ordinal {
    use super::LogLevel;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(level: &LogLevel, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(level.ordinal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LogLevel, D::Error> {
        let ordinal = u8::deserialize(deserializer)?;
        LogLevel::from_ordinal(ordinal)
            .ok_or_else(|| de::Error::custom(format!("invalid level ordinal {}", ordinal)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_round_trip() {
        for name in LEVEL_NAMES {
            let level = name_to_level(name).unwrap();
            assert_eq!(level_to_name(level), name);
        }
    }

    #[test]
    fn test_name_lookup_is_case_sensitive() {
        assert_eq!(name_to_level("warn"), Some(LogLevel::Warn));
        assert_eq!(name_to_level("WARN"), None);
        assert_eq!(name_to_level("warning"), None);
        assert_eq!(name_to_level(""), None);
    }

    #[test]
    fn test_ordinals_are_fixed() {
        assert_eq!(LogLevel::Silent.ordinal(), 0);
        assert_eq!(LogLevel::Error.ordinal(), 1);
        assert_eq!(LogLevel::Warn.ordinal(), 2);
        assert_eq!(LogLevel::Info.ordinal(), 3);
        assert_eq!(LogLevel::Debug.ordinal(), 4);
        assert_eq!(LogLevel::from_ordinal(5), None);
        assert_eq!(LogLevel::saturating_from_ordinal(42), LogLevel::Debug);
    }

    #[test]
    fn test_level_arg_resolution() {
        assert_eq!(LevelArg::from("debug").resolve(), Some(LogLevel::Debug));
        assert_eq!(LevelArg::from("loud").resolve(), None);
        assert_eq!(LevelArg::from(2u8).resolve(), Some(LogLevel::Warn));
        assert_eq!(LevelArg::from(LogLevel::Error).resolve(), Some(LogLevel::Error));
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }
}
