//! Endpoint parameters and the modem settings derived from them.

use super::ModemDomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Baud rate used when the `baud` parameter is not set.
pub const DEFAULT_BAUD_RATE: u32 = 57_600;

/// Parameter key for the serial baud rate.
pub const BAUD_KEY: &str = "baud";
/// Parameter key for the modem manufacturer.
pub const MANUFACTURER_KEY: &str = "manufacturer";
/// Parameter key for the modem model.
pub const MODEL_KEY: &str = "model";
/// Parameter key for the modem handler name.
pub const HANDLER_KEY: &str = "handler";
/// Parameter key for the SIM PIN.
pub const PIN_KEY: &str = "pin";
/// Parameter key for the SMS service centre number.
pub const SMSC_NUMBER_KEY: &str = "smscNumber";

/// Raw endpoint parameters as supplied by the router.
///
/// A `None` value is an explicit null. Deserialises from a JSON object whose
/// values are strings or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceParameters(BTreeMap<String, Option<String>>);

impl ServiceParameters {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), Some(value.into()));
        self
    }

    /// Sets a parameter to an explicit null.
    #[must_use]
    pub fn with_null(mut self, key: impl Into<String>) -> Self {
        self.0.insert(key.into(), None);
        self
    }

    /// Returns a value, treating absent and null the same.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Option::as_deref)
    }

    /// Returns a value only when it is present, non-null and non-empty.
    #[must_use]
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Returns whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for ServiceParameters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.map(Into::into)))
                .collect(),
        )
    }
}

/// Connection settings for constructing a modem-control service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModemSettings {
    baud_rate: u32,
    manufacturer: String,
    model: String,
    handler: String,
    verbose: bool,
    sim_pin: Option<String>,
    smsc_number: Option<String>,
}

impl ModemSettings {
    /// Derives settings from endpoint parameters.
    ///
    /// Missing `baud`, `manufacturer`, `model` and `handler` fall back to
    /// 57600 and empty strings. `pin` and `smscNumber` are kept only when
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ModemDomainError::InvalidBaudRate`] when `baud` is set but
    /// is not a positive integer.
    pub fn from_parameters(
        parameters: &ServiceParameters,
        verbose: bool,
    ) -> Result<Self, ModemDomainError> {
        let baud_rate = match parameters.non_empty(BAUD_KEY) {
            None => DEFAULT_BAUD_RATE,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|rate| *rate > 0)
                .ok_or_else(|| ModemDomainError::InvalidBaudRate(raw.to_owned()))?,
        };
        let text = |key: &str| parameters.get(key).unwrap_or_default().to_owned();

        Ok(Self {
            baud_rate,
            manufacturer: text(MANUFACTURER_KEY),
            model: text(MODEL_KEY),
            handler: text(HANDLER_KEY),
            verbose,
            sim_pin: parameters.non_empty(PIN_KEY).map(str::to_owned),
            smsc_number: parameters.non_empty(SMSC_NUMBER_KEY).map(str::to_owned),
        })
    }

    /// Returns the serial baud rate.
    #[must_use]
    pub const fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    /// Returns the modem manufacturer.
    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Returns the modem model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the modem handler name.
    #[must_use]
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Returns whether the modem library logs verbosely.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Returns the SIM PIN to apply, if any.
    #[must_use]
    pub fn sim_pin(&self) -> Option<&str> {
        self.sim_pin.as_deref()
    }

    /// Returns the service centre number to apply, if any.
    #[must_use]
    pub fn smsc_number(&self) -> Option<&str> {
        self.smsc_number.as_deref()
    }
}

/// Identity of one modem endpoint: URI, target device and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModemEndpoint {
    uri: String,
    target: String,
    parameters: ServiceParameters,
}

impl ModemEndpoint {
    /// Creates an endpoint identity.
    #[must_use]
    pub fn new(
        uri: impl Into<String>,
        target: impl Into<String>,
        parameters: ServiceParameters,
    ) -> Self {
        Self {
            uri: uri.into(),
            target: target.into(),
            parameters,
        }
    }

    /// Returns the endpoint URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the target device or port name.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the endpoint parameters.
    #[must_use]
    pub const fn parameters(&self) -> &ServiceParameters {
        &self.parameters
    }
}
