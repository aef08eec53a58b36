//! Fire-and-forget delivery of bridge commands

use super::{
    bridge_sink::BridgeSink,
    error::{ErrorCallback, LoggerError},
    log_record::NativeLogRecord,
    metrics::BridgeMetrics,
};
use crossbeam_channel::{bounded, unbounded, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for the delivery worker (5 seconds)
///
/// Used when the dispatcher is dropped without an explicit `shutdown()`.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

enum BridgeCommand {
    Send(NativeLogRecord),
    SetUseSyslog(bool),
    Flush(Sender<()>),
}

impl BridgeCommand {
    fn operation(&self) -> &'static str {
        match self {
            BridgeCommand::Send(_) => "send",
            BridgeCommand::SetUseSyslog(_) => "setUseSyslog",
            BridgeCommand::Flush(_) => "flush",
        }
    }
}

/// Delivers commands to a [`BridgeSink`] without ever failing the caller.
///
/// Worker mode hands commands to a single background thread over an
/// unbounded channel, so the caller never waits and commands reach the
/// bridge in the order they were issued. Inline mode calls the bridge on
/// the logging thread and is only suitable for bridges that just enqueue.
/// Failures in either mode go to the error callback.
pub struct BridgeDispatcher {
    bridge: Arc<dyn BridgeSink>,
    on_error: ErrorCallback,
    metrics: Arc<BridgeMetrics>,
    sender: Option<Sender<BridgeCommand>>,
    worker: Option<thread::JoinHandle<()>>,
    stopped: bool,
}

impl BridgeDispatcher {
    pub fn inline(bridge: Arc<dyn BridgeSink>, on_error: ErrorCallback) -> Self {
        Self {
            bridge,
            on_error,
            metrics: Arc::new(BridgeMetrics::new()),
            sender: None,
            worker: None,
            stopped: false,
        }
    }

    pub fn with_worker(bridge: Arc<dyn BridgeSink>, on_error: ErrorCallback) -> Self {
        let (sender, receiver) = unbounded::<BridgeCommand>();
        let metrics = Arc::new(BridgeMetrics::new());

        let worker_bridge = Arc::clone(&bridge);
        let worker_on_error = Arc::clone(&on_error);
        let worker_metrics = Arc::clone(&metrics);

        let handle = thread::Builder::new()
            .name("bridge-dispatch".into())
            .spawn(move || {
                // Runs until every sender is gone, draining what is queued.
                for command in receiver.iter() {
                    Self::execute(
                        worker_bridge.as_ref(),
                        command,
                        &worker_on_error,
                        &worker_metrics,
                    );
                }
            });

        match handle {
            Ok(handle) => Self {
                bridge,
                on_error,
                metrics,
                sender: Some(sender),
                worker: Some(handle),
                stopped: false,
            },
            Err(e) => {
                on_error(&LoggerError::other(format!(
                    "could not start bridge worker, delivering inline: {}",
                    e
                )));
                Self::inline(bridge, on_error)
            }
        }
    }

    pub fn send(&self, record: NativeLogRecord) {
        self.dispatch(BridgeCommand::Send(record));
    }

    pub fn set_use_syslog(&self, use_syslog: bool) {
        self.dispatch(BridgeCommand::SetUseSyslog(use_syslog));
    }

    pub fn metrics(&self) -> &BridgeMetrics {
        &self.metrics
    }

    /// Wait until every command issued so far has reached the bridge.
    ///
    /// Returns `false` if that did not happen within `timeout`.
    pub fn flush(&self, timeout: Duration) -> bool {
        let Some(ref sender) = self.sender else {
            return !self.stopped;
        };

        let (reply_tx, reply_rx) = bounded(1);
        if sender.send(BridgeCommand::Flush(reply_tx)).is_err() {
            return false;
        }
        reply_rx.recv_timeout(timeout).is_ok()
    }

    /// Stop the worker after it drains the queue.
    ///
    /// Returns `true` if the worker finished within `timeout`. Commands
    /// issued afterwards are reported as failures.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        self.stopped = true;
        drop(self.sender.take());

        let Some(handle) = self.worker.take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    (self.on_error)(&LoggerError::other(format!(
                        "bridge worker panicked during shutdown: {:?}",
                        e
                    )));
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                (self.on_error)(&LoggerError::other(
                    "bridge worker did not finish within timeout, some logs may be lost",
                ));
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }

    fn dispatch(&self, command: BridgeCommand) {
        if self.stopped {
            self.metrics.record_failed();
            (self.on_error)(&LoggerError::LoggerStopped);
            return;
        }

        let Some(ref sender) = self.sender else {
            Self::execute(self.bridge.as_ref(), command, &self.on_error, &self.metrics);
            return;
        };

        if sender.send(command).is_err() {
            self.metrics.record_failed();
            (self.on_error)(&LoggerError::ChannelSend);
        }
    }

    /// Run one command against the bridge with panic isolation.
    fn execute(
        bridge: &dyn BridgeSink,
        command: BridgeCommand,
        on_error: &ErrorCallback,
        metrics: &BridgeMetrics,
    ) {
        let operation = command.operation();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| match command {
            BridgeCommand::Send(ref record) => bridge.send(record),
            BridgeCommand::SetUseSyslog(flag) => bridge.set_use_syslog(flag),
            BridgeCommand::Flush(ref reply) => {
                let _ = reply.send(());
                Ok(())
            }
        }));

        if operation == "flush" {
            return;
        }

        match result {
            Ok(Ok(())) => {
                metrics.record_delivered();
            }
            Ok(Err(e)) => {
                metrics.record_failed();
                on_error(&e);
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                metrics.record_failed();
                on_error(&LoggerError::bridge_rejected(
                    operation,
                    format!("bridge '{}' panicked: {}", bridge.name(), panic_msg),
                ));
            }
        }
    }
}

impl Drop for BridgeDispatcher {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
        }
    }
}
