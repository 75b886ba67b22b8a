//! Smslink: a shared SMS modem link for message routers.
//!
//! One physical GSM modem is shared by any number of router endpoints. The
//! link opens the modem when the first user starts and closes it when the
//! last user stops, translating router envelopes to modem messages and back.
//!
//! # Architecture
//!
//! Smslink follows hexagonal architecture principles:
//!
//! - **Domain**: Phone numbers, envelopes, messages and endpoint settings
//! - **Ports**: Modem control, translation, construction and inbound delivery
//! - **Adapters**: Parameter-driven factory, header translator, in-memory modem
//!
//! # Modules
//!
//! - [`sms`]: The shared modem link and its collaborators

pub mod sms;
