//! SMS over a shared serial modem.
//!
//! This module lets a message router send and receive SMS through a
//! modem-control library. One [`services::ModemLinkService`] owns the
//! connection for an endpoint and keeps it open while any user needs it.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
