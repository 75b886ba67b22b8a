//! Domain model for the shared modem link.
//!
//! Value types for phone numbers, router envelopes, modem messages, user
//! handles and endpoint settings. Nothing here performs I/O.

mod envelope;
mod error;
mod ids;
mod message;
mod phone;
mod settings;

pub use envelope::{
    MEMORY_INDEX_HEADER, MessageEnvelope, ORIGINATOR_HEADER, RECEIVED_AT_HEADER, RECIPIENT_HEADER,
    STATUS_REPORT_HEADER,
};
pub use error::ModemDomainError;
pub use ids::{EnvelopeId, ServiceUserId};
pub use message::{IncomingSms, MessageEncoding, OutgoingSms};
pub use phone::PhoneNumber;
pub use settings::{
    BAUD_KEY, DEFAULT_BAUD_RATE, HANDLER_KEY, MANUFACTURER_KEY, MODEL_KEY, ModemEndpoint,
    ModemSettings, PIN_KEY, SMSC_NUMBER_KEY, ServiceParameters,
};
