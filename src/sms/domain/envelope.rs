//! Generic routing envelope exchanged with the surrounding router.

use super::EnvelopeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header carrying the destination number of an outbound envelope.
pub const RECIPIENT_HEADER: &str = "SmsRecipient";
/// Header carrying the sender number of an inbound envelope.
pub const ORIGINATOR_HEADER: &str = "SmsOriginator";
/// Header carrying the RFC 3339 receive timestamp of an inbound envelope.
pub const RECEIVED_AT_HEADER: &str = "SmsReceivedAt";
/// Header requesting a delivery status report when set to `"true"`.
pub const STATUS_REPORT_HEADER: &str = "SmsStatusReport";
/// Header carrying the modem memory slot of an inbound message.
pub const MEMORY_INDEX_HEADER: &str = "SmsMemoryIndex";

/// Router-side message: string headers plus an optional text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEnvelope {
    id: EnvelopeId,
    headers: BTreeMap<String, String>,
    body: Option<String>,
}

impl MessageEnvelope {
    /// Creates an empty envelope with a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: EnvelopeId::new(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any previous value.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the text body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns the envelope identifier.
    #[must_use]
    pub const fn id(&self) -> EnvelopeId {
        self.id
    }

    /// Returns a header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns all headers.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Returns the text body.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}

impl Default for MessageEnvelope {
    fn default() -> Self {
        Self::new()
    }
}
