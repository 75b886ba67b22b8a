//! Error types for SMS domain validation.

use thiserror::Error;

/// Errors returned while constructing SMS domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModemDomainError {
    /// The phone number is empty after stripping separators.
    #[error("phone number must not be empty")]
    EmptyPhoneNumber,

    /// The phone number contains characters other than digits and an
    /// optional leading `+`, or its digit count is out of range.
    #[error("invalid phone number: '{0}'")]
    InvalidPhoneNumber(String),

    /// Message text is empty.
    #[error("message text must not be empty")]
    EmptyMessageText,

    /// The configured baud rate is not a positive integer.
    #[error("invalid baud rate: '{0}'")]
    InvalidBaudRate(String),
}
