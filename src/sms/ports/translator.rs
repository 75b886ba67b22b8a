//! Translation port between router envelopes and modem messages.

use crate::sms::domain::{IncomingSms, MessageEnvelope, ModemDomainError, OutgoingSms};
use thiserror::Error;

/// Result type for translation.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Converts envelopes to modem messages and back.
#[cfg_attr(test, mockall::automock)]
pub trait MessageTranslator: Send + Sync {
    /// Converts a router envelope into a message the modem can submit.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] when the envelope is malformed.
    fn translate_outgoing(&self, envelope: &MessageEnvelope) -> TranslateResult<OutgoingSms>;

    /// Converts a message read from the modem into a router envelope.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError`] when the message cannot be represented.
    fn translate_incoming(&self, message: &IncomingSms) -> TranslateResult<MessageEnvelope>;
}

/// Errors returned while translating messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The envelope names no recipient.
    #[error("envelope {0} has no recipient header")]
    MissingRecipient(String),

    /// The envelope has no text body.
    #[error("envelope {0} has no body")]
    MissingBody(String),

    /// A header value could not be interpreted.
    #[error("invalid header '{name}': {value}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Offending value.
        value: String,
    },

    /// A domain value could not be constructed.
    #[error(transparent)]
    Domain(#[from] ModemDomainError),
}
