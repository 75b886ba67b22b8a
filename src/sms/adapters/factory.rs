//! Parameter-driven modem service factory.

use crate::sms::{
    domain::{ModemSettings, ServiceParameters},
    ports::{ModemConnector, ModemControlService, ModemFactoryResult, ModemServiceFactory},
};
use std::sync::Arc;
use tracing::debug;

/// Verbosity passed to every service this factory constructs.
const VERBOSE: bool = true;

/// Factory that resolves [`ModemSettings`] from endpoint parameters and opens
/// the service through a [`ModemConnector`].
///
/// After construction the SMSC number and SIM PIN are applied, each only when
/// its parameter is present and non-empty.
#[derive(Debug, Clone)]
pub struct ConfiguredModemServiceFactory<C>
where
    C: ModemConnector,
{
    connector: Arc<C>,
}

impl<C> ConfiguredModemServiceFactory<C>
where
    C: ModemConnector,
{
    /// Creates a factory backed by `connector`.
    #[must_use]
    pub const fn new(connector: Arc<C>) -> Self {
        Self { connector }
    }
}

impl<C> ModemServiceFactory for ConfiguredModemServiceFactory<C>
where
    C: ModemConnector,
{
    fn create(
        &self,
        uri: &str,
        target: &str,
        parameters: &ServiceParameters,
    ) -> ModemFactoryResult<Arc<dyn ModemControlService>> {
        let settings = ModemSettings::from_parameters(parameters, VERBOSE)?;
        debug!(
            uri,
            target,
            baud = settings.baud_rate(),
            manufacturer = settings.manufacturer(),
            model = settings.model(),
            handler = settings.handler(),
            "opening modem control service"
        );

        let service = self.connector.open(target, &settings)?;

        if let Some(number) = settings.smsc_number() {
            service.set_smsc_number(number)?;
        }
        if let Some(pin) = settings.sim_pin() {
            service.set_sim_pin(pin)?;
        }

        Ok(service)
    }
}
