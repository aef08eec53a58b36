//! Property-based tests for tagged_logger using proptest

use proptest::prelude::*;
use std::sync::Arc;
use tagged_logger::core::{format_console_line, format_milliseconds, level_to_name, name_to_level};
use tagged_logger::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Silent),
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
    ]
}

fn active_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Every level name maps back to the same level
    #[test]
    fn test_level_name_roundtrip(level in any_level()) {
        let name = level_to_name(level);
        prop_assert_eq!(name_to_level(name), Some(level));
        prop_assert_eq!(name.parse::<LogLevel>().unwrap(), level);
    }

    /// Ordinal order and name order agree
    #[test]
    fn test_level_ordering_follows_ordinals(a in any_level(), b in any_level()) {
        prop_assert_eq!(a.cmp(&b), a.ordinal().cmp(&b.ordinal()));
    }

    /// Any ordinal resolves to some level
    #[test]
    fn test_saturating_ordinal(ordinal in any::<u8>()) {
        let level = LogLevel::saturating_from_ordinal(ordinal);
        if ordinal <= 4 {
            prop_assert_eq!(level.ordinal(), ordinal);
        } else {
            prop_assert_eq!(level, LogLevel::Debug);
        }
    }

    /// Names outside the registry are rejected
    #[test]
    fn test_unknown_names_rejected(name in "[a-z]{1,10}") {
        let known = ["silent", "error", "warn", "info", "debug"];
        prop_assume!(!known.contains(&name.as_str()));
        prop_assert!(name_to_level(&name).is_none());
    }
}

// ============================================================================
// Gating Tests
// ============================================================================

proptest! {
    /// A message is shown exactly when its level is at or below the threshold
    #[test]
    fn test_gate_matches_ordering(threshold in any_level(), level in active_level()) {
        let console = Arc::new(MemoryConsole::new());
        let logger = Logger::builder("P")
            .platform(StaticPlatform::web())
            .console(console.clone())
            .level(threshold)
            .build();

        logger.log_at_level(level, "m");
        prop_assert_eq!(console.lines().len() == 1, level <= threshold);
    }

    /// Raising the threshold never hides a message that was shown
    #[test]
    fn test_gate_is_monotonic(low in any_level(), high in any_level(), level in active_level()) {
        prop_assume!(low <= high);
        if low.allows(level) {
            prop_assert!(high.allows(level));
        }
    }
}

// ============================================================================
// Label Tests
// ============================================================================

proptest! {
    /// Setting one label leaves the others alone
    #[test]
    fn test_label_merge_is_local(level in active_level(), label in "[A-Za-z!]{1,8}") {
        let defaults = LevelLabels::default();
        let mut labels = LevelLabels::default();
        labels.merge([(level.to_str(), label.as_str())]);

        for other in [LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug] {
            let expected = if other == level {
                Some(label.as_str())
            } else {
                defaults.get(other)
            };
            prop_assert_eq!(labels.get(other), expected);
        }
    }

    /// Empty labels never replace a stored label
    #[test]
    fn test_empty_label_ignored(level in active_level()) {
        let mut labels = LevelLabels::default();
        prop_assert!(!labels.set(level.to_str(), ""));
        prop_assert_eq!(labels.len(), 4);
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

proptest! {
    /// Sub-second durations print as whole milliseconds
    #[test]
    fn test_milliseconds_below_one_second(ms in 0u64..1000) {
        prop_assert_eq!(format_milliseconds(ms), format!("{}ms", ms));
    }

    /// Durations under a minute print as seconds
    #[test]
    fn test_seconds_below_one_minute(ms in 1000u64..60_000) {
        let text = format_milliseconds(ms);
        prop_assert!(text.ends_with('s'));
        let prefix = format!("{}.", ms / 1000);
        prop_assert!(text.starts_with(&prefix));
    }

    /// Durations of an hour or more print hours, minutes and seconds
    #[test]
    fn test_hours_format(ms in 3_600_000u64..100_000_000) {
        let text = format_milliseconds(ms);
        prop_assert!(text.ends_with(" (hr:min:sec)"));
        let prefix = format!("{}:", ms / 3_600_000);
        prop_assert!(text.starts_with(&prefix));
    }

    /// ASCII labels follow the tag
    #[test]
    fn test_ascii_label_placement(tag in "[A-Za-z]{1,8}", label in "[A-Z]{1,5}", message in "[ -~]{0,20}") {
        let line = format_console_line(&tag, &label, &message);
        prop_assert_eq!(line, format!("[{}] {}: {}", tag, label, message));
    }

    /// Non-ASCII labels precede the tag
    #[test]
    fn test_emoji_label_placement(tag in "[A-Za-z]{1,8}", message in "[ -~]{0,20}") {
        let line = format_console_line(&tag, "🟢", &message);
        prop_assert_eq!(line, format!("🟢 [{}]: {}", tag, message));
    }
}

// ============================================================================
// Timer Tests
// ============================================================================

proptest! {
    /// Named timers are independent of each other
    #[test]
    fn test_timers_independent(names in prop::collection::hash_set("[a-z]{1,6}", 1..6)) {
        let console = Arc::new(MemoryConsole::new());
        let logger = Logger::builder("P")
            .platform(StaticPlatform::web())
            .console(console.clone())
            .build();

        for name in &names {
            logger.time(Some(name.as_str()));
        }
        let first = names.iter().next().unwrap();
        logger.time_end(Some(first.as_str()));

        for name in &names {
            prop_assert_eq!(logger.has_timer(Some(name.as_str())), name != first);
        }
        prop_assert_eq!(console.lines().len(), 1);
    }
}
