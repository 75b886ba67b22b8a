//! Modem-library message types.

use super::{ModemDomainError, PhoneNumber};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters of the GSM 03.38 default alphabet that can be sent without
/// switching to UCS-2. Extension-table characters are excluded.
const GSM7_BASIC_CHARSET: &str = "@£$¥èéùìòÇ\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞÆæßÉ !\"#¤%&'()*+,-./0123456789:;<=>?\
¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑÜ§¿abcdefghijklmnopqrstuvwxyzäöñüà";

/// Data coding used when the modem submits a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEncoding {
    /// GSM 7-bit default alphabet.
    Gsm7,
    /// 16-bit UCS-2.
    Ucs2,
}

impl MessageEncoding {
    /// Chooses the narrowest encoding able to carry `text`.
    #[must_use]
    pub fn for_text(text: &str) -> Self {
        if text
            .chars()
            .all(|character| GSM7_BASIC_CHARSET.contains(character))
        {
            Self::Gsm7
        } else {
            Self::Ucs2
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gsm7 => "gsm7",
            Self::Ucs2 => "ucs2",
        }
    }
}

impl fmt::Display for MessageEncoding {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Message handed to the modem for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingSms {
    recipient: PhoneNumber,
    text: String,
    encoding: MessageEncoding,
    status_report_requested: bool,
}

impl OutgoingSms {
    /// Creates an outgoing message, choosing the encoding from the text.
    ///
    /// # Errors
    ///
    /// Returns [`ModemDomainError::EmptyMessageText`] when `text` is empty.
    pub fn new(recipient: PhoneNumber, text: impl Into<String>) -> Result<Self, ModemDomainError> {
        let body = text.into();
        if body.is_empty() {
            return Err(ModemDomainError::EmptyMessageText);
        }

        Ok(Self {
            recipient,
            encoding: MessageEncoding::for_text(&body),
            text: body,
            status_report_requested: false,
        })
    }

    /// Requests a delivery status report from the network.
    #[must_use]
    pub const fn with_status_report(mut self, requested: bool) -> Self {
        self.status_report_requested = requested;
        self
    }

    /// Returns the destination number.
    #[must_use]
    pub const fn recipient(&self) -> &PhoneNumber {
        &self.recipient
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the chosen data coding.
    #[must_use]
    pub const fn encoding(&self) -> MessageEncoding {
        self.encoding
    }

    /// Returns whether a delivery status report was requested.
    #[must_use]
    pub const fn status_report_requested(&self) -> bool {
        self.status_report_requested
    }
}

/// Message read from the modem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingSms {
    originator: PhoneNumber,
    text: String,
    received_at: DateTime<Utc>,
    memory_index: Option<u32>,
}

impl IncomingSms {
    /// Creates an incoming message stamped with the clock's current time.
    #[must_use]
    pub fn new(originator: PhoneNumber, text: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            originator,
            text: text.into(),
            received_at: clock.utc(),
            memory_index: None,
        }
    }

    /// Records the modem memory slot the message was read from.
    #[must_use]
    pub const fn with_memory_index(mut self, index: u32) -> Self {
        self.memory_index = Some(index);
        self
    }

    /// Returns the sender number.
    #[must_use]
    pub const fn originator(&self) -> &PhoneNumber {
        &self.originator
    }

    /// Returns the message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when the message was read.
    #[must_use]
    pub const fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Returns the modem memory slot, if known.
    #[must_use]
    pub const fn memory_index(&self) -> Option<u32> {
        self.memory_index
    }
}
