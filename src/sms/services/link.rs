//! Shared modem link: reference-counted connection lifecycle and send path.

use crate::sms::{
    adapters::DefaultMessageTranslator,
    domain::{IncomingSms, MessageEnvelope, ModemEndpoint, ServiceParameters, ServiceUserId},
    ports::{
        ConsumerError, IncomingMessageConsumer, MessageTranslator, ModemControlError,
        ModemControlService, ModemFactoryError, ModemServiceFactory, TranslateError,
    },
};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Service-level errors for modem link operations.
///
/// Every variant wraps the originating error unchanged so callers can match
/// on the failure kind.
#[derive(Debug, Error)]
pub enum ModemLinkServiceError {
    /// The modem-control service could not be built.
    #[error(transparent)]
    Factory(#[from] ModemFactoryError),
    /// A message could not be translated.
    #[error(transparent)]
    Translate(#[from] TranslateError),
    /// The modem-control service reported a failure.
    #[error(transparent)]
    Control(#[from] ModemControlError),
    /// The inbound consumer refused a message.
    #[error(transparent)]
    Consumer(#[from] ConsumerError),
    /// An inbound message arrived with no consumer registered.
    #[error("no consumer registered for modem endpoint {0}")]
    NoConsumer(String),
}

/// Result type for modem link operations.
pub type ModemLinkServiceResult<T> = Result<T, ModemLinkServiceError>;

/// One modem connection shared by any number of users.
///
/// The connection is opened on behalf of each user that calls
/// [`start_for`](Self::start_for) and closed once the last registered user
/// calls [`stop_for`](Self::stop_for). Starting, stopping and sending are
/// serialised on one lock, and the lock is held across the modem call so a
/// disconnect can never interleave with a concurrent start.
pub struct ModemLinkService {
    endpoint: ModemEndpoint,
    connection: Arc<dyn ModemControlService>,
    translator: Arc<dyn MessageTranslator>,
    consumer: RwLock<Option<Arc<dyn IncomingMessageConsumer>>>,
    users: Mutex<HashSet<ServiceUserId>>,
}

impl ModemLinkService {
    /// Creates the link, building its modem-control service immediately.
    ///
    /// The factory is called exactly once with `uri`, `target` and
    /// `parameters`.
    ///
    /// # Errors
    ///
    /// Returns [`ModemLinkServiceError::Factory`] when the service cannot be
    /// built.
    pub fn new<F>(
        factory: &F,
        uri: impl Into<String>,
        target: impl Into<String>,
        parameters: ServiceParameters,
    ) -> ModemLinkServiceResult<Self>
    where
        F: ModemServiceFactory + ?Sized,
    {
        let endpoint = ModemEndpoint::new(uri, target, parameters);
        let connection =
            factory.create(endpoint.uri(), endpoint.target(), endpoint.parameters())?;
        debug!(uri = endpoint.uri(), target = endpoint.target(), "modem link created");

        Ok(Self {
            endpoint,
            connection,
            translator: Arc::new(DefaultMessageTranslator::new()),
            consumer: RwLock::new(None),
            users: Mutex::new(HashSet::new()),
        })
    }

    /// Replaces the message translator.
    #[must_use]
    pub fn with_translator(mut self, translator: Arc<dyn MessageTranslator>) -> Self {
        self.translator = translator;
        self
    }

    /// Returns the endpoint identity.
    #[must_use]
    pub const fn endpoint(&self) -> &ModemEndpoint {
        &self.endpoint
    }

    /// Reports the live connection state of the modem.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// Returns the number of registered users.
    pub async fn active_users(&self) -> usize {
        self.users.lock().await.len()
    }

    /// Returns whether `user` is registered.
    pub async fn has_user(&self, user: ServiceUserId) -> bool {
        self.users.lock().await.contains(&user)
    }

    /// Registers `user` and connects the modem.
    ///
    /// `connect` is called on every start, including when the modem already
    /// reports connected. Registering a user twice has no further effect on
    /// the user set. If connecting fails, a user added by this call is
    /// removed again.
    ///
    /// # Errors
    ///
    /// Returns [`ModemLinkServiceError::Control`] when connecting fails.
    pub async fn start_for(&self, user: ServiceUserId) -> ModemLinkServiceResult<()> {
        let mut users = self.users.lock().await;
        let newly_registered = users.insert(user);

        if self.connection.is_connected() {
            debug!(uri = self.endpoint.uri(), %user, "modem already connected");
        }

        if let Err(err) = self.connection.connect().await {
            if newly_registered {
                users.remove(&user);
            }
            warn!(uri = self.endpoint.uri(), %user, error = %err, "modem connect failed");
            return Err(err.into());
        }

        info!(
            uri = self.endpoint.uri(),
            %user,
            active_users = users.len(),
            "modem link started"
        );
        Ok(())
    }

    /// Deregisters `user`, disconnecting the modem if no users remain.
    ///
    /// The modem is disconnected only when the user set is empty after
    /// removal and the modem reports connected.
    ///
    /// # Errors
    ///
    /// Returns [`ModemLinkServiceError::Control`] when disconnecting fails.
    /// The user stays deregistered.
    pub async fn stop_for(&self, user: ServiceUserId) -> ModemLinkServiceResult<()> {
        let mut users = self.users.lock().await;
        users.remove(&user);

        if !users.is_empty() {
            debug!(
                uri = self.endpoint.uri(),
                %user,
                active_users = users.len(),
                "modem link still in use"
            );
            return Ok(());
        }

        if !self.connection.is_connected() {
            debug!(uri = self.endpoint.uri(), %user, "modem not connected");
            return Ok(());
        }

        self.connection.disconnect().await?;
        info!(uri = self.endpoint.uri(), %user, "modem link stopped");
        Ok(())
    }

    /// Translates `envelope` and submits it through the modem once.
    ///
    /// Translation happens before the modem is touched. Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`ModemLinkServiceError::Translate`] when the envelope cannot
    /// be translated, or [`ModemLinkServiceError::Control`] when the modem
    /// rejects the message or the link is down.
    pub async fn send(&self, envelope: &MessageEnvelope) -> ModemLinkServiceResult<()> {
        let message = self.translator.translate_outgoing(envelope)?;

        let _users = self.users.lock().await;
        self.connection.send_message(&message).await?;

        debug!(
            uri = self.endpoint.uri(),
            envelope = %envelope.id(),
            recipient = %message.recipient().masked(),
            encoding = %message.encoding(),
            "message sent"
        );
        Ok(())
    }

    /// Registers the consumer that receives inbound envelopes.
    ///
    /// Any previously registered consumer is replaced.
    pub async fn set_consumer(&self, consumer: Arc<dyn IncomingMessageConsumer>) {
        *self.consumer.write().await = Some(consumer);
    }

    /// Removes the registered consumer.
    pub async fn clear_consumer(&self) {
        *self.consumer.write().await = None;
    }

    /// Translates a message read from the modem and forwards it to the
    /// registered consumer.
    ///
    /// # Errors
    ///
    /// Returns [`ModemLinkServiceError::NoConsumer`] when no consumer is
    /// registered, [`ModemLinkServiceError::Translate`] when translation
    /// fails, or [`ModemLinkServiceError::Consumer`] when the consumer
    /// refuses the envelope.
    pub async fn receive(&self, message: &IncomingSms) -> ModemLinkServiceResult<()> {
        let consumer = self
            .consumer
            .read()
            .await
            .clone()
            .ok_or_else(|| ModemLinkServiceError::NoConsumer(self.endpoint.uri().to_owned()))?;

        let envelope = self.translator.translate_incoming(message)?;
        let envelope_id = envelope.id();
        consumer.consume(envelope).await?;

        debug!(
            uri = self.endpoint.uri(),
            envelope = %envelope_id,
            originator = %message.originator().masked(),
            "message received"
        );
        Ok(())
    }
}
