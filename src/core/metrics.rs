//! Bridge delivery metrics
//!
//! Counters for commands that reached the native bridge and commands
//! that did not.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for bridge delivery
///
/// # Example
///
/// ```
/// use tagged_logger::BridgeMetrics;
///
/// let metrics = BridgeMetrics::new();
///
/// metrics.record_delivered();
/// metrics.record_failed();
///
/// assert_eq!(metrics.delivered_count(), 1);
/// assert_eq!(metrics.failed_count(), 1);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug)]
pub struct BridgeMetrics {
    /// Commands the bridge accepted
    delivered_count: AtomicU64,

    /// Commands the bridge rejected or that never reached it
    failed_count: AtomicU64,
}

impl BridgeMetrics {
    pub const fn new() -> Self {
        Self {
            delivered_count: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered_count(&self) -> u64 {
        self.delivered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count() as f64;
        let total = self.delivered_count() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.delivered_count.store(0, Ordering::Relaxed);
        self.failed_count.store(0, Ordering::Relaxed);
    }
}

impl Default for BridgeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BridgeMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            delivered_count: AtomicU64::new(self.delivered_count()),
            failed_count: AtomicU64::new(self.failed_count()),
        }
    }
}
