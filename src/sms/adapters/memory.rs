//! In-memory modem adapter for tests and local runs.

use crate::sms::{
    domain::{ModemSettings, OutgoingSms, PhoneNumber},
    ports::{ModemConnector, ModemControlError, ModemControlResult, ModemControlService},
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory modem-control service.
///
/// Models connection state, submissions and configuration without a serial
/// port. Call counters and failure injection make lifecycle behaviour
/// observable from tests. Clones share state.
#[derive(Debug, Clone)]
pub struct InMemoryModemService {
    target: String,
    settings: ModemSettings,
    state: Arc<RwLock<InMemoryModemState>>,
}

#[derive(Debug, Default)]
struct InMemoryModemState {
    connected: bool,
    connect_calls: usize,
    disconnect_calls: usize,
    sent: Vec<OutgoingSms>,
    smsc_number: Option<String>,
    sim_pin: Option<String>,
    required_pin: Option<String>,
    next_connect_failure: Option<String>,
    rejected_recipients: HashSet<PhoneNumber>,
}

fn lock_error(err: impl ToString) -> ModemControlError {
    ModemControlError::runtime(std::io::Error::other(err.to_string()))
}

impl InMemoryModemService {
    /// Creates a disconnected service for `target`.
    #[must_use]
    pub fn new(target: impl Into<String>, settings: ModemSettings) -> Self {
        Self {
            target: target.into(),
            settings,
            state: Arc::default(),
        }
    }

    fn read(&self) -> ModemControlResult<RwLockReadGuard<'_, InMemoryModemState>> {
        self.state.read().map_err(lock_error)
    }

    fn write(&self) -> ModemControlResult<RwLockWriteGuard<'_, InMemoryModemState>> {
        self.state.write().map_err(lock_error)
    }

    /// Returns the device name the service was opened for.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the settings the service was opened with.
    #[must_use]
    pub const fn settings(&self) -> &ModemSettings {
        &self.settings
    }

    /// Requires `pin` to be configured before `connect` succeeds.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn require_sim_pin(&self, pin: impl Into<String>) -> ModemControlResult<()> {
        self.write()?.required_pin = Some(pin.into());
        Ok(())
    }

    /// Makes the next `connect` call fail with a connection error.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn fail_next_connect(&self, reason: impl Into<String>) -> ModemControlResult<()> {
        self.write()?.next_connect_failure = Some(reason.into());
        Ok(())
    }

    /// Makes every submission to `recipient` fail with a rejection.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn reject_recipient(&self, recipient: PhoneNumber) -> ModemControlResult<()> {
        self.write()?.rejected_recipients.insert(recipient);
        Ok(())
    }

    /// Simulates the link dropping without a `disconnect` call.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn drop_link(&self) -> ModemControlResult<()> {
        self.write()?.connected = false;
        Ok(())
    }

    /// Returns how many times `connect` was called.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn connect_calls(&self) -> ModemControlResult<usize> {
        Ok(self.read()?.connect_calls)
    }

    /// Returns how many times `disconnect` was called.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn disconnect_calls(&self) -> ModemControlResult<usize> {
        Ok(self.read()?.disconnect_calls)
    }

    /// Returns every message accepted so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn sent_messages(&self) -> ModemControlResult<Vec<OutgoingSms>> {
        Ok(self.read()?.sent.clone())
    }

    /// Returns the configured service centre number.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn smsc_number(&self) -> ModemControlResult<Option<String>> {
        Ok(self.read()?.smsc_number.clone())
    }

    /// Returns the configured SIM PIN.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn sim_pin(&self) -> ModemControlResult<Option<String>> {
        Ok(self.read()?.sim_pin.clone())
    }
}

#[async_trait]
impl ModemControlService for InMemoryModemService {
    async fn connect(&self) -> ModemControlResult<()> {
        let mut state = self.write()?;
        state.connect_calls += 1;

        if let Some(reason) = state.next_connect_failure.take() {
            return Err(ModemControlError::connection_failed(reason));
        }
        if state.required_pin.is_some() && state.required_pin != state.sim_pin {
            return Err(ModemControlError::connection_failed(
                "SIM PIN required or incorrect",
            ));
        }

        state.connected = true;
        Ok(())
    }

    async fn disconnect(&self) -> ModemControlResult<()> {
        let mut state = self.write()?;
        state.disconnect_calls += 1;
        state.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.state.read().is_ok_and(|state| state.connected)
    }

    async fn send_message(&self, message: &OutgoingSms) -> ModemControlResult<()> {
        let mut state = self.write()?;
        if !state.connected {
            return Err(ModemControlError::connection_failed(format!(
                "{} is not connected",
                self.target
            )));
        }
        if state.rejected_recipients.contains(message.recipient()) {
            return Err(ModemControlError::rejected(format!(
                "recipient {} refused",
                message.recipient().masked()
            )));
        }

        state.sent.push(message.clone());
        Ok(())
    }

    fn set_smsc_number(&self, number: &str) -> ModemControlResult<()> {
        self.write()?.smsc_number = Some(number.to_owned());
        Ok(())
    }

    fn set_sim_pin(&self, pin: &str) -> ModemControlResult<()> {
        self.write()?.sim_pin = Some(pin.to_owned());
        Ok(())
    }
}

/// Connector that opens [`InMemoryModemService`] instances and keeps a
/// handle to each for later inspection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModemConnector {
    opened: Arc<RwLock<Vec<Arc<InMemoryModemService>>>>,
}

impl InMemoryModemConnector {
    /// Creates a connector with no opened services.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every service opened so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn opened(&self) -> ModemControlResult<Vec<Arc<InMemoryModemService>>> {
        Ok(self.opened.read().map_err(lock_error)?.clone())
    }

    /// Returns the most recently opened service.
    ///
    /// # Errors
    ///
    /// Returns runtime errors when lock acquisition fails.
    pub fn last_opened(&self) -> ModemControlResult<Option<Arc<InMemoryModemService>>> {
        Ok(self.opened.read().map_err(lock_error)?.last().cloned())
    }
}

impl ModemConnector for InMemoryModemConnector {
    fn open(
        &self,
        target: &str,
        settings: &ModemSettings,
    ) -> ModemControlResult<Arc<dyn ModemControlService>> {
        let service = Arc::new(InMemoryModemService::new(target, settings.clone()));
        self.opened
            .write()
            .map_err(lock_error)?
            .push(Arc::clone(&service));
        Ok(service)
    }
}
