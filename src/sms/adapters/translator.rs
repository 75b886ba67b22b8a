//! Header-based envelope translator.

use crate::sms::{
    domain::{
        IncomingSms, MEMORY_INDEX_HEADER, MessageEnvelope, ORIGINATOR_HEADER, OutgoingSms,
        PhoneNumber, RECEIVED_AT_HEADER, RECIPIENT_HEADER, STATUS_REPORT_HEADER,
    },
    ports::{MessageTranslator, TranslateError, TranslateResult},
};

/// Maps envelopes to modem messages using well-known headers.
///
/// Outbound envelopes need a [`RECIPIENT_HEADER`] and a non-empty body.
/// [`STATUS_REPORT_HEADER`] accepts `true` or `false` (case-insensitive).
/// Inbound messages become envelopes with [`ORIGINATOR_HEADER`],
/// [`RECEIVED_AT_HEADER`] and, when known, [`MEMORY_INDEX_HEADER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessageTranslator;

impl DefaultMessageTranslator {
    /// Creates the translator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn status_report_flag(envelope: &MessageEnvelope) -> TranslateResult<bool> {
    let Some(raw) = envelope.header(STATUS_REPORT_HEADER) else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        _ => Err(TranslateError::InvalidHeader {
            name: STATUS_REPORT_HEADER.to_owned(),
            value: raw.to_owned(),
        }),
    }
}

impl MessageTranslator for DefaultMessageTranslator {
    fn translate_outgoing(&self, envelope: &MessageEnvelope) -> TranslateResult<OutgoingSms> {
        let recipient = envelope
            .header(RECIPIENT_HEADER)
            .ok_or_else(|| TranslateError::MissingRecipient(envelope.id().to_string()))?;
        let body = envelope
            .body()
            .filter(|text| !text.is_empty())
            .ok_or_else(|| TranslateError::MissingBody(envelope.id().to_string()))?;

        let sms = OutgoingSms::new(PhoneNumber::new(recipient)?, body)?
            .with_status_report(status_report_flag(envelope)?);
        Ok(sms)
    }

    fn translate_incoming(&self, message: &IncomingSms) -> TranslateResult<MessageEnvelope> {
        let mut envelope = MessageEnvelope::new()
            .with_header(ORIGINATOR_HEADER, message.originator().as_str())
            .with_header(RECEIVED_AT_HEADER, message.received_at().to_rfc3339())
            .with_body(message.text());
        if let Some(index) = message.memory_index() {
            envelope = envelope.with_header(MEMORY_INDEX_HEADER, index.to_string());
        }
        Ok(envelope)
    }
}
