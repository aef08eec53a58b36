//! Named timers

use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;

/// Key of a timer. The unnamed timer can never collide with a label,
/// including one spelled `"default"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerKey {
    Named(String),
    Default,
}

impl TimerKey {
    /// A missing or empty label selects the default timer.
    pub fn resolve(label: Option<&str>) -> Self {
        match label {
            Some(label) if !label.is_empty() => TimerKey::Named(label.to_string()),
            _ => TimerKey::Default,
        }
    }
}

impl fmt::Display for TimerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerKey::Named(label) => f.write_str(label),
            TimerKey::Default => f.write_str("default"),
        }
    }
}

/// Start timestamps keyed by timer.
#[derive(Debug, Default)]
pub struct TimerTable {
    starts: Mutex<HashMap<TimerKey, i64>>,
}

impl TimerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or restart a timer.
    pub fn start(&self, key: TimerKey, now_millis: i64) {
        self.starts.lock().insert(key, now_millis);
    }

    /// Milliseconds since the timer started, or `None` if it does not exist.
    /// A clock that went backwards reads as zero.
    pub fn elapsed(&self, key: &TimerKey, now_millis: i64) -> Option<u64> {
        self.starts
            .lock()
            .get(key)
            .map(|start| now_millis.saturating_sub(*start).max(0) as u64)
    }

    pub fn remove(&self, key: &TimerKey) -> bool {
        self.starts.lock().remove(key).is_some()
    }

    pub fn contains(&self, key: &TimerKey) -> bool {
        self.starts.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.starts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(TimerKey::resolve(None), TimerKey::Default);
        assert_eq!(TimerKey::resolve(Some("")), TimerKey::Default);
        assert_eq!(
            TimerKey::resolve(Some("default")),
            TimerKey::Named("default".into())
        );
        assert_ne!(TimerKey::resolve(Some("default")), TimerKey::Default);
    }

    #[test]
    fn test_display() {
        assert_eq!(TimerKey::Default.to_string(), "default");
        assert_eq!(TimerKey::Named("load".into()).to_string(), "load");
    }

    #[test]
    fn test_restart_overwrites() {
        let table = TimerTable::new();
        let key = TimerKey::Named("fetch".into());
        table.start(key.clone(), 100);
        table.start(key.clone(), 400);
        assert_eq!(table.elapsed(&key, 450), Some(50));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_quiet() {
        let table = TimerTable::new();
        assert!(!table.remove(&TimerKey::Default));
        assert_eq!(table.elapsed(&TimerKey::Default, 10), None);
    }

    #[test]
    fn test_backwards_clock_reads_zero() {
        let table = TimerTable::new();
        table.start(TimerKey::Default, 1_000);
        assert_eq!(table.elapsed(&TimerKey::Default, 900), Some(0));
    }
}
