//! Construction ports for modem-control services.

use super::{ModemControlError, ModemControlResult, ModemControlService};
use crate::sms::domain::{ModemDomainError, ModemSettings, ServiceParameters};
use std::sync::Arc;
use thiserror::Error;

/// Result type for factory operations.
pub type ModemFactoryResult<T> = Result<T, ModemFactoryError>;

/// Builds a configured modem-control service for an endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait ModemServiceFactory: Send + Sync {
    /// Creates the service for `uri`, talking to device `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ModemFactoryError`] when the parameters are invalid or the
    /// service cannot be constructed or configured.
    fn create(
        &self,
        uri: &str,
        target: &str,
        parameters: &ServiceParameters,
    ) -> ModemFactoryResult<Arc<dyn ModemControlService>>;
}

/// Opens a raw modem-control service from resolved settings.
///
/// This is the constructor seam of the modem library: it receives the port,
/// baud rate, manufacturer, model, handler and verbosity, and nothing else.
#[cfg_attr(test, mockall::automock)]
pub trait ModemConnector: Send + Sync {
    /// Constructs an unconnected service for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ModemControlError`] when the library refuses the settings.
    fn open(
        &self,
        target: &str,
        settings: &ModemSettings,
    ) -> ModemControlResult<Arc<dyn ModemControlService>>;
}

/// Errors returned while building a modem-control service.
#[derive(Debug, Clone, Error)]
pub enum ModemFactoryError {
    /// Endpoint parameters failed validation.
    #[error(transparent)]
    Settings(#[from] ModemDomainError),

    /// Construction or configuration of the service failed.
    #[error(transparent)]
    Control(#[from] ModemControlError),
}
