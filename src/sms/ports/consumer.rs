//! Inbound port: receives envelopes translated from modem messages.

use crate::sms::domain::MessageEnvelope;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for consumer operations.
pub type ConsumerResult<T> = Result<T, ConsumerError>;

/// Router-side sink for inbound messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IncomingMessageConsumer: Send + Sync {
    /// Accepts one inbound envelope.
    async fn consume(&self, envelope: MessageEnvelope) -> ConsumerResult<()>;
}

/// Errors returned by consumers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsumerError {
    /// The consumer no longer accepts messages.
    #[error("consumer is closed")]
    Closed,

    /// The consumer refused the envelope.
    #[error("consumer rejected envelope: {0}")]
    Rejected(String),
}
