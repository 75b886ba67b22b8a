//! Reference-counted connection lifecycle over the in-memory modem.

use std::sync::Arc;

use eyre::Result;
use rstest::rstest;
use smslink::sms::{
    domain::ServiceUserId,
    ports::ModemControlError,
    services::ModemLinkServiceError,
};

use super::helpers::{LinkContext, context, envelope_to};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_start_connects_and_last_stop_disconnects(context: LinkContext) -> Result<()> {
    let modem = context.modem()?;
    let (first, second) = (ServiceUserId::new(), ServiceUserId::new());

    context.link.start_for(first).await?;
    context.link.start_for(second).await?;
    assert!(context.link.is_connected());
    assert_eq!(context.link.active_users().await, 2);

    context.link.stop_for(first).await?;
    assert!(context.link.is_connected());
    assert_eq!(modem.disconnect_calls()?, 0);

    context.link.stop_for(second).await?;
    assert!(!context.link.is_connected());
    assert_eq!(modem.connect_calls()?, 2);
    assert_eq!(modem.disconnect_calls()?, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn restart_after_full_stop_reconnects(context: LinkContext) -> Result<()> {
    let modem = context.modem()?;
    let user = ServiceUserId::new();

    context.link.start_for(user).await?;
    context.link.stop_for(user).await?;
    context.link.start_for(user).await?;

    assert!(context.link.is_connected());
    assert!(context.link.has_user(user).await);
    assert_eq!(modem.connect_calls()?, 2);
    assert_eq!(modem.disconnect_calls()?, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stopping_unknown_user_leaves_idle_modem_alone(context: LinkContext) -> Result<()> {
    let modem = context.modem()?;
    let user = ServiceUserId::new();
    context.link.start_for(user).await?;
    context.link.stop_for(user).await?;

    context.link.stop_for(ServiceUserId::new()).await?;

    assert_eq!(modem.disconnect_calls()?, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_connect_leaves_no_registration(context: LinkContext) -> Result<()> {
    let modem = context.modem()?;
    modem.fail_next_connect("port busy")?;
    let user = ServiceUserId::new();

    let result = context.link.start_for(user).await;

    assert!(matches!(
        result,
        Err(ModemLinkServiceError::Control(
            ModemControlError::ConnectionFailed { .. }
        ))
    ));
    assert!(!context.link.has_user(user).await);
    assert!(!context.link.is_connected());

    context.link.start_for(user).await?;
    assert!(context.link.is_connected());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_users_leave_modem_disconnected(context: LinkContext) -> Result<()> {
    const USERS: usize = 16;
    let modem = context.modem()?;

    let mut handles = Vec::with_capacity(USERS);
    for index in 0..USERS {
        let link = Arc::clone(&context.link);
        handles.push(tokio::spawn(async move {
            let user = ServiceUserId::new();
            link.start_for(user).await?;
            link.send(&envelope_to("+447700900123", &format!("message {index}")))
                .await?;
            link.stop_for(user).await
        }));
    }
    for handle in handles {
        handle.await??;
    }

    assert_eq!(context.link.active_users().await, 0);
    assert!(!context.link.is_connected());
    assert_eq!(modem.sent_messages()?.len(), USERS);
    assert_eq!(modem.connect_calls()?, USERS);
    Ok(())
}
