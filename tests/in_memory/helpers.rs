//! Shared fixtures for in-memory modem link tests.

use std::sync::Arc;

use eyre::{Result, eyre};
use rstest::fixture;
use smslink::sms::{
    adapters::{ConfiguredModemServiceFactory, InMemoryModemConnector, InMemoryModemService},
    domain::{MessageEnvelope, RECIPIENT_HEADER, ServiceParameters},
    services::ModemLinkService,
};

/// Endpoint URI used by every test link.
pub const URI: &str = "smslib://ttyUSB0";

/// Serial device used by every test link.
pub const TARGET: &str = "ttyUSB0";

/// A link together with the in-memory modem behind it.
pub struct LinkContext {
    pub connector: Arc<InMemoryModemConnector>,
    pub link: Arc<ModemLinkService>,
}

impl LinkContext {
    /// Builds a link over a fresh in-memory connector.
    pub fn build(parameters: ServiceParameters) -> Result<Self> {
        let connector = Arc::new(InMemoryModemConnector::new());
        let factory = ConfiguredModemServiceFactory::new(Arc::clone(&connector));
        let link = ModemLinkService::new(&factory, URI, TARGET, parameters)?;
        Ok(Self {
            connector,
            link: Arc::new(link),
        })
    }

    /// Returns the modem the link was built over.
    pub fn modem(&self) -> Result<Arc<InMemoryModemService>> {
        self.connector
            .last_opened()?
            .ok_or_else(|| eyre!("connector should have opened a modem"))
    }
}

#[fixture]
pub fn context() -> LinkContext {
    LinkContext::build(ServiceParameters::new()).expect("default link should build")
}

/// Builds an outbound envelope addressed to `recipient`.
pub fn envelope_to(recipient: &str, body: &str) -> MessageEnvelope {
    MessageEnvelope::new()
        .with_header(RECIPIENT_HEADER, recipient)
        .with_body(body)
}
