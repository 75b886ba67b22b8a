//! Channel-backed inbound consumer.

use crate::sms::{
    domain::MessageEnvelope,
    ports::{ConsumerError, ConsumerResult, IncomingMessageConsumer},
};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Forwards inbound envelopes into a bounded `tokio` channel.
#[derive(Debug, Clone)]
pub struct ChannelMessageConsumer {
    sender: mpsc::Sender<MessageEnvelope>,
}

impl ChannelMessageConsumer {
    /// Creates a consumer and the receiver that drains it.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<MessageEnvelope>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl IncomingMessageConsumer for ChannelMessageConsumer {
    async fn consume(&self, envelope: MessageEnvelope) -> ConsumerResult<()> {
        self.sender
            .send(envelope)
            .await
            .map_err(|_| ConsumerError::Closed)
    }
}
