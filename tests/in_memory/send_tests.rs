//! Outbound submission through the in-memory modem.

use eyre::Result;
use rstest::rstest;
use smslink::sms::{
    domain::{MessageEncoding, MessageEnvelope, PhoneNumber, STATUS_REPORT_HEADER, ServiceUserId},
    ports::{ModemControlError, TranslateError},
    services::ModemLinkServiceError,
};

use super::helpers::{LinkContext, context, envelope_to};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sent_envelope_reaches_the_modem(context: LinkContext) -> Result<()> {
    context.link.start_for(ServiceUserId::new()).await?;
    let envelope =
        envelope_to("+44 7700 900123", "Привет").with_header(STATUS_REPORT_HEADER, "true");

    context.link.send(&envelope).await?;

    let sent = context.modem()?.sent_messages()?;
    let [message] = sent.as_slice() else {
        panic!("expected exactly one message, got {sent:?}");
    };
    assert_eq!(message.recipient().as_str(), "+447700900123");
    assert_eq!(message.text(), "Привет");
    assert_eq!(message.encoding(), MessageEncoding::Ucs2);
    assert!(message.status_report_requested());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn send_without_started_user_reports_connection_failure(
    context: LinkContext,
) -> Result<()> {
    let result = context
        .link
        .send(&envelope_to("+447700900123", "hello"))
        .await;

    assert!(matches!(
        result,
        Err(ModemLinkServiceError::Control(
            ModemControlError::ConnectionFailed { .. }
        ))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropped_link_fails_send_without_retry(context: LinkContext) -> Result<()> {
    let modem = context.modem()?;
    context.link.start_for(ServiceUserId::new()).await?;
    modem.drop_link()?;

    let result = context
        .link
        .send(&envelope_to("+447700900123", "hello"))
        .await;

    assert!(matches!(result, Err(ModemLinkServiceError::Control(_))));
    assert_eq!(modem.connect_calls()?, 1);
    assert!(modem.sent_messages()?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_recipient_is_reported(context: LinkContext) -> Result<()> {
    let modem = context.modem()?;
    modem.reject_recipient(PhoneNumber::new("+15550000000")?)?;
    context.link.start_for(ServiceUserId::new()).await?;

    let result = context.link.send(&envelope_to("+15550000000", "hi")).await;

    assert!(matches!(
        result,
        Err(ModemLinkServiceError::Control(
            ModemControlError::MessageRejected { .. }
        ))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn untranslatable_envelope_never_reaches_the_modem(context: LinkContext) -> Result<()> {
    context.link.start_for(ServiceUserId::new()).await?;
    let envelope = MessageEnvelope::new().with_body("no recipient");

    let result = context.link.send(&envelope).await;

    assert!(matches!(
        result,
        Err(ModemLinkServiceError::Translate(
            TranslateError::MissingRecipient(_)
        ))
    ));
    assert!(context.modem()?.sent_messages()?.is_empty());
    Ok(())
}
