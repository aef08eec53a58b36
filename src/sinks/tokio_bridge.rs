//! Adapter for bridges with an async API

use crate::core::{BridgeSink, ErrorCallback, LoggerError, NativeLogRecord, Result};
use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

/// A native bridge whose calls are futures.
///
/// # Example
///
/// ```no_run
/// use tagged_logger::core::{NativeLogRecord, Result};
/// use tagged_logger::sinks::AsyncBridgeSink;
/// use async_trait::async_trait;
///
/// struct PluginBridge;
///
/// #[async_trait]
/// impl AsyncBridgeSink for PluginBridge {
///     async fn send(&self, record: NativeLogRecord) -> Result<()> {
///         // hand the record to the plugin
///         Ok(())
///     }
///
///     async fn set_use_syslog(&self, use_syslog: bool) -> Result<()> {
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "plugin"
///     }
/// }
/// ```
#[async_trait]
pub trait AsyncBridgeSink: Send + Sync {
    async fn send(&self, record: NativeLogRecord) -> Result<()>;

    async fn set_use_syslog(&self, use_syslog: bool) -> Result<()>;

    fn name(&self) -> &str;
}

enum AsyncCommand {
    Send(NativeLogRecord),
    SetUseSyslog(bool),
}

/// Runs an [`AsyncBridgeSink`] on a tokio runtime.
///
/// Calls are queued to one task that awaits them in order. Queueing never
/// blocks; failures of the awaited calls go to the error callback.
pub struct TokioBridge {
    sender: UnboundedSender<AsyncCommand>,
    name: String,
}

impl TokioBridge {
    pub fn spawn<B: AsyncBridgeSink + 'static>(
        handle: &Handle,
        bridge: B,
        on_error: ErrorCallback,
    ) -> Self {
        let (sender, mut receiver) = unbounded_channel();
        let name = bridge.name().to_string();

        handle.spawn(async move {
            while let Some(command) = receiver.recv().await {
                let result = match command {
                    AsyncCommand::Send(record) => bridge.send(record).await,
                    AsyncCommand::SetUseSyslog(flag) => bridge.set_use_syslog(flag).await,
                };
                if let Err(e) = result {
                    on_error(&e);
                }
            }
        });

        Self { sender, name }
    }

    fn enqueue(&self, command: AsyncCommand) -> Result<()> {
        self.sender
            .send(command)
            .map_err(|_| LoggerError::BridgeUnavailable(format!("{} task has stopped", self.name)))
    }
}

impl BridgeSink for TokioBridge {
    fn send(&self, record: &NativeLogRecord) -> Result<()> {
        self.enqueue(AsyncCommand::Send(record.clone()))
    }

    fn set_use_syslog(&self, use_syslog: bool) -> Result<()> {
        self.enqueue(AsyncCommand::SetUseSyslog(use_syslog))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
