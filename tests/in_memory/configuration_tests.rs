//! Endpoint parameters applied to the in-memory modem.

use eyre::Result;
use rstest::rstest;
use smslink::sms::{
    domain::{DEFAULT_BAUD_RATE, ModemDomainError, ServiceParameters, ServiceUserId},
    ports::ModemFactoryError,
    services::ModemLinkServiceError,
};

use super::helpers::{LinkContext, TARGET};

#[rstest]
fn serial_settings_reach_the_modem() -> Result<()> {
    let context = LinkContext::build(
        ServiceParameters::new()
            .with("baud", "115200")
            .with("manufacturer", "Wavecom")
            .with("model", "M1306B")
            .with_null("handler"),
    )?;
    let modem = context.modem()?;

    assert_eq!(modem.target(), TARGET);
    assert_eq!(modem.settings().baud_rate(), 115_200);
    assert_eq!(modem.settings().manufacturer(), "Wavecom");
    assert_eq!(modem.settings().model(), "M1306B");
    assert_eq!(modem.settings().handler(), "");
    assert_eq!(context.link.endpoint().target(), TARGET);
    Ok(())
}

#[rstest]
fn default_settings_leave_credentials_unset() -> Result<()> {
    let context = LinkContext::build(ServiceParameters::new().with("pin", ""))?;
    let modem = context.modem()?;

    assert_eq!(modem.settings().baud_rate(), DEFAULT_BAUD_RATE);
    assert_eq!(modem.smsc_number()?, None);
    assert_eq!(modem.sim_pin()?, None);
    Ok(())
}

#[rstest]
fn smsc_number_and_pin_are_applied() -> Result<()> {
    let context = LinkContext::build(
        ServiceParameters::new()
            .with("smscNumber", "+447785016005")
            .with("pin", "0000"),
    )?;
    let modem = context.modem()?;

    assert_eq!(modem.smsc_number()?.as_deref(), Some("+447785016005"));
    assert_eq!(modem.sim_pin()?.as_deref(), Some("0000"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_pin_unlocks_the_modem() -> Result<()> {
    let context = LinkContext::build(ServiceParameters::new().with("pin", "4321"))?;
    context.modem()?.require_sim_pin("4321")?;

    context.link.start_for(ServiceUserId::new()).await?;

    assert!(context.link.is_connected());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_pin_keeps_the_modem_locked() -> Result<()> {
    let context = LinkContext::build(ServiceParameters::new())?;
    context.modem()?.require_sim_pin("4321")?;

    let result = context.link.start_for(ServiceUserId::new()).await;

    assert!(matches!(result, Err(ModemLinkServiceError::Control(_))));
    assert_eq!(context.link.active_users().await, 0);
    Ok(())
}

#[rstest]
fn invalid_baud_rate_fails_link_creation() {
    let result = LinkContext::build(ServiceParameters::new().with("baud", "0"));

    let err = result.err().expect("link creation should fail");
    assert!(matches!(
        err.downcast_ref::<ModemLinkServiceError>(),
        Some(ModemLinkServiceError::Factory(ModemFactoryError::Settings(
            ModemDomainError::InvalidBaudRate(_)
        )))
    ));
}
