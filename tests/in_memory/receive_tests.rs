//! Inbound delivery from the modem to a registered consumer.

use std::sync::Arc;

use eyre::{Result, eyre};
use mockable::DefaultClock;
use rstest::rstest;
use smslink::sms::{
    adapters::ChannelMessageConsumer,
    domain::{IncomingSms, ORIGINATOR_HEADER, PhoneNumber},
    ports::ConsumerError,
    services::ModemLinkServiceError,
};

use super::helpers::{LinkContext, URI, context};

fn incoming(text: &str) -> Result<IncomingSms> {
    Ok(IncomingSms::new(
        PhoneNumber::new("+15557654321")?,
        text,
        &DefaultClock,
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn received_message_reaches_the_consumer(context: LinkContext) -> Result<()> {
    let (consumer, mut receiver) = ChannelMessageConsumer::channel(8);
    context.link.set_consumer(Arc::new(consumer)).await;

    context.link.receive(&incoming("first")?).await?;
    context.link.receive(&incoming("second")?).await?;

    for expected in ["first", "second"] {
        let envelope = receiver
            .recv()
            .await
            .ok_or_else(|| eyre!("consumer channel closed early"))?;
        assert_eq!(envelope.body(), Some(expected));
        assert_eq!(envelope.header(ORIGINATOR_HEADER), Some("+15557654321"));
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn receive_without_consumer_names_the_endpoint(context: LinkContext) -> Result<()> {
    let result = context.link.receive(&incoming("lost")?).await;

    assert!(matches!(
        result,
        Err(ModemLinkServiceError::NoConsumer(uri)) if uri == URI
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closed_consumer_is_reported(context: LinkContext) -> Result<()> {
    let (consumer, receiver) = ChannelMessageConsumer::channel(1);
    context.link.set_consumer(Arc::new(consumer)).await;
    drop(receiver);

    let result = context.link.receive(&incoming("late")?).await;

    assert!(matches!(
        result,
        Err(ModemLinkServiceError::Consumer(ConsumerError::Closed))
    ));
    Ok(())
}
