//! Port contracts for the shared modem link.

mod consumer;
mod control;
mod factory;
mod translator;

pub use consumer::{ConsumerError, ConsumerResult, IncomingMessageConsumer};
pub use control::{ModemControlError, ModemControlResult, ModemControlService};
pub use factory::{ModemConnector, ModemFactoryError, ModemFactoryResult, ModemServiceFactory};
pub use translator::{MessageTranslator, TranslateError, TranslateResult};

#[cfg(test)]
pub use consumer::MockIncomingMessageConsumer;
#[cfg(test)]
pub use control::MockModemControlService;
#[cfg(test)]
pub use factory::{MockModemConnector, MockModemServiceFactory};
#[cfg(test)]
pub use translator::MockMessageTranslator;
