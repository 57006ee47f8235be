//! Intent delivery to the embedding host.

use storefront::intents::{Intent, IntentError, IntentMessage, IntentSink};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

/// Writes each message to the log as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingIntentSink;

impl IntentSink for TracingIntentSink {
    fn send(&self, message: IntentMessage) -> Result<(), IntentError> {
        let json = message.to_json()?;

        info!(message = %json, "intent");

        Ok(())
    }
}

/// Forwards messages to a host listening on a channel.
#[derive(Debug, Clone)]
pub struct ChannelIntentSink {
    sender: UnboundedSender<IntentMessage>,
}

impl ChannelIntentSink {
    /// A sink and the receiver the host reads from.
    #[must_use]
    pub fn new() -> (Self, UnboundedReceiver<IntentMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, receiver)
    }
}

impl IntentSink for ChannelIntentSink {
    fn send(&self, message: IntentMessage) -> Result<(), IntentError> {
        self.sender
            .send(message)
            .map_err(|_err| IntentError::Disconnected)
    }
}

/// Send `intent` to `sink`. Delivery failures are logged and otherwise ignored.
pub fn dispatch(sink: &dyn IntentSink, intent: &Intent) {
    if let Err(error) = sink.send(intent.message()) {
        warn!(%error, %intent, "failed to deliver intent");
    }
}
