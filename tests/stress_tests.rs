//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Per-thread order is kept through the background bridge worker
//! - A slow bridge never holds up the logging threads or loses commands
//! - Failing and panicking bridges never reach the caller
//! - Timers stay consistent under concurrent use

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tagged_logger::prelude::*;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

fn counting_errors() -> (ErrorCallback, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let callback: ErrorCallback = Arc::new(move |_: &LoggerError| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (callback, count)
}

/// Bridge that takes a while per record
struct SlowBridge {
    delay: Duration,
    received: Mutex<Vec<String>>,
}

impl BridgeSink for SlowBridge {
    fn send(&self, record: &NativeLogRecord) -> Result<()> {
        thread::sleep(self.delay);
        self.received.lock().push(record.message.clone());
        Ok(())
    }

    fn set_use_syslog(&self, _use_syslog: bool) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "slow"
    }
}

/// Bridge that panics on every call
struct PanickingBridge;

impl BridgeSink for PanickingBridge {
    fn send(&self, _record: &NativeLogRecord) -> Result<()> {
        panic!("bridge crashed");
    }

    fn set_use_syslog(&self, _use_syslog: bool) -> Result<()> {
        panic!("bridge crashed");
    }

    fn name(&self) -> &str {
        "panicking"
    }
}

/// Test that records from each thread reach the bridge in the order issued
#[test]
fn test_per_thread_order_through_worker() {
    let bridge = Arc::new(MemoryBridge::new());
    let (on_error, errors) = counting_errors();
    let logger = Arc::new(
        Logger::builder("Stress")
            .platform(StaticPlatform::ios())
            .bridge(bridge.clone())
            .on_error(on_error)
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.info(format!("{}:{}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert!(logger.flush(Duration::from_secs(10)));
    assert_eq!(errors.load(Ordering::SeqCst), 0);

    let messages = bridge.messages();
    assert_eq!(messages.len(), THREADS * PER_THREAD);

    let mut next = vec![0usize; THREADS];
    for message in &messages {
        let (thread_id, index) = message.split_once(':').unwrap();
        let thread_id: usize = thread_id.parse().unwrap();
        let index: usize = index.parse().unwrap();
        assert_eq!(index, next[thread_id], "thread {} out of order", thread_id);
        next[thread_id] += 1;
    }
}

/// Test that a slow bridge delivers everything without stalling the callers
#[test]
fn test_slow_bridge_delivers_every_command() {
    let bridge = Arc::new(SlowBridge {
        delay: Duration::from_millis(2),
        received: Mutex::new(Vec::new()),
    });
    let (on_error, errors) = counting_errors();
    let logger = Arc::new(
        Logger::builder("Flood")
            .platform(StaticPlatform::android())
            .bridge(bridge.clone())
            .on_error(on_error)
            .build(),
    );

    let sent = 4 * 50;
    let start = Instant::now();
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..50 {
                    logger.warn(format!("{}-{}", t, i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    // The worker needs at least 400ms to deliver all of them.
    assert!(start.elapsed() < Duration::from_millis(200));

    assert!(logger.flush(Duration::from_secs(30)));

    let metrics = logger.bridge_metrics().unwrap();
    assert_eq!(metrics.delivered_count() as usize, sent);
    assert_eq!(metrics.failed_count(), 0);
    assert_eq!(bridge.received.lock().len(), sent);
    assert_eq!(errors.load(Ordering::SeqCst), 0);
}

/// Test that a failing bridge under load only produces error reports
#[test]
fn test_failing_bridge_under_load() {
    let bridge = Arc::new(MemoryBridge::new());
    bridge.set_failing(true);
    let (on_error, errors) = counting_errors();
    let logger = Arc::new(
        Logger::builder("Fail")
            .platform(StaticPlatform::ios())
            .bridge(bridge.clone())
            .on_error(on_error)
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.error(format!("failure {}", i));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert!(logger.flush(Duration::from_secs(10)));

    assert_eq!(errors.load(Ordering::SeqCst), THREADS * PER_THREAD);
    assert_eq!(
        logger.bridge_metrics().unwrap().failed_count() as usize,
        THREADS * PER_THREAD
    );
    assert!(bridge.records().is_empty());
}

/// Test that a panicking bridge does not take the worker down
#[test]
fn test_panicking_bridge_keeps_worker_alive() {
    let (on_error, errors) = counting_errors();
    let mut logger = Logger::builder("Panic")
        .platform(StaticPlatform::ios())
        .bridge(Arc::new(PanickingBridge))
        .on_error(on_error)
        .build();

    for i in 0..100 {
        logger.info(format!("boom {}", i));
    }
    logger.set_use_syslog(true);

    assert!(logger.flush(Duration::from_secs(10)));
    assert!(logger.shutdown(Duration::from_secs(5)));
    assert_eq!(errors.load(Ordering::SeqCst), 101);
}

/// Test that timers started from many threads stay separate
#[test]
fn test_concurrent_timers() {
    let logger = Arc::new(
        Logger::builder("Timers")
            .platform(StaticPlatform::web())
            .console(Arc::new(NoopConsole))
            .build(),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                let label = format!("timer-{}", t);
                for _ in 0..PER_THREAD {
                    logger.time(Some(label.as_str()));
                    logger.time_log(Some(label.as_str()));
                    logger.time_end(Some(label.as_str()));
                }
                logger.time(Some(label.as_str()));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..THREADS {
        assert!(logger.has_timer(Some(format!("timer-{}", t).as_str())));
    }
    assert!(!logger.has_timer(None));
}
