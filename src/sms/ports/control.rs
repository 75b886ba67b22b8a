//! Modem-control port: one physical or virtual modem connection.

use crate::sms::domain::OutgoingSms;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for modem-control operations.
pub type ModemControlResult<T> = Result<T, ModemControlError>;

/// Control contract for a single modem connection.
///
/// Implementations are shared between callers, so every method takes
/// `&self`. Calls may block for the duration of the underlying serial I/O.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModemControlService: Send + Sync {
    /// Opens the connection.
    ///
    /// Callers may invoke this while already connected; implementations
    /// decide whether that is a no-op.
    async fn connect(&self) -> ModemControlResult<()>;

    /// Closes the connection.
    async fn disconnect(&self) -> ModemControlResult<()>;

    /// Reports whether the connection is currently open.
    fn is_connected(&self) -> bool;

    /// Submits one message through the modem.
    ///
    /// # Errors
    ///
    /// Returns [`ModemControlError::MessageRejected`] when the modem declines
    /// the message, or [`ModemControlError::ConnectionFailed`] when the link
    /// is down.
    async fn send_message(&self, message: &OutgoingSms) -> ModemControlResult<()>;

    /// Sets the SMS service centre number used for submissions.
    fn set_smsc_number(&self, number: &str) -> ModemControlResult<()>;

    /// Sets the SIM PIN presented when connecting.
    fn set_sim_pin(&self, pin: &str) -> ModemControlResult<()>;
}

/// Errors returned by modem-control adapters.
#[derive(Debug, Clone, Error)]
pub enum ModemControlError {
    /// The modem declined a well-formed message.
    #[error("message rejected by modem: {reason}")]
    MessageRejected {
        /// Reason reported by the modem.
        reason: String,
    },

    /// The connection is down or could not be established.
    #[error("modem connection failed: {reason}")]
    ConnectionFailed {
        /// Reason reported by the modem.
        reason: String,
    },

    /// Generic adapter failure.
    #[error("modem runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl ModemControlError {
    /// Builds a rejection error.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::MessageRejected {
            reason: reason.into(),
        }
    }

    /// Builds a connection failure error.
    #[must_use]
    pub fn connection_failed(reason: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            reason: reason.into(),
        }
    }

    /// Wraps a runtime error from the adapter.
    #[must_use]
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
