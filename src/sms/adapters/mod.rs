//! Adapter implementations for the modem link ports.

mod channel;
mod factory;
pub mod memory;
mod translator;

pub use channel::ChannelMessageConsumer;
pub use factory::ConfiguredModemServiceFactory;
pub use memory::{InMemoryModemConnector, InMemoryModemService};
pub use translator::DefaultMessageTranslator;
