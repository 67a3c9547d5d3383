// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use anyhow::{format_err, Result};
use jid::{BareJid, FullJid, Jid};
use minidom::Element;
use parking_lot::{Mutex, RwLock};
use secrecy::Secret;
use tokio::time::Instant;
use tracing::{info, warn};
use xmpp_parsers::iq::Iq;
use xmpp_parsers::message::{Body, Message};
use xmpp_parsers::ping::Ping;
use xmpp_parsers::presence::{Presence, Type as PresenceType};
use xmpp_parsers::roster::{Group, Item, Roster};

use crate::client::builder::ClientBuilder;
use crate::client::pending_requests::PendingRequests;
use crate::client::{ConnectorProvider, EventHandler};
use crate::connector::{Connection, ConnectionError, ConnectionEvent};
use crate::{Event, IDProvider, RequestError};

/// The relay's connection to its XMPP account. Cloning is cheap, clones share the connection.
#[derive(Clone)]
pub struct Client {
    pub(super) inner: Arc<ClientInner>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.inner.connect(jid, password).await
    }

    /// Ends the stream. The `Disconnected` event follows once the connection has been torn down.
    pub fn disconnect(&self) {
        self.inner.disconnect()
    }

    pub fn send_message(&self, to: impl Into<Jid>, body: impl Into<String>) -> Result<()> {
        let mut message = Message::chat(Some(to.into()));
        message.id = Some(self.inner.id_provider.new_id());
        message.from = Some(self.inner.full_jid()?.into());
        message.bodies.insert(String::new(), Body(body.into()));
        self.inner.send_stanza(message)
    }

    /// Announces our availability.
    /// https://xmpp.org/rfcs/rfc6121.html#presence-initial
    pub fn send_presence(&self, priority: i8) -> Result<()> {
        self.inner
            .send_stanza(Presence::new(PresenceType::None).with_priority(priority))
    }
}

/// RFC 6121: Managing the Roster
/// https://xmpp.org/rfcs/rfc6121.html#roster
impl Client {
    pub async fn load_roster(&self) -> Result<Roster> {
        let iq = Iq::from_get(
            self.inner.id_provider.new_id(),
            Roster {
                ver: None,
                items: vec![],
            },
        );

        let Some(response) = self.inner.send_iq(iq).await? else {
            return Err(RequestError::UnexpectedResponse.into());
        };

        Ok(Roster::try_from(response)?)
    }

    /// Sends a roster set without waiting for the result. The server confirms the change
    /// with a roster push.
    pub fn update_roster_item(
        &self,
        jid: &BareJid,
        name: Option<&str>,
        groups: &[String],
    ) -> Result<()> {
        let iq = Iq::from_set(
            self.inner.id_provider.new_id(),
            Roster {
                ver: None,
                items: vec![Item {
                    jid: jid.clone(),
                    name: name.map(ToString::to_string),
                    subscription: Default::default(),
                    ask: Default::default(),
                    groups: groups.iter().cloned().map(Group).collect(),
                }],
            },
        );
        self.inner.send_stanza(iq)
    }

    pub fn subscribe_to_presence(&self, jid: &BareJid) -> Result<()> {
        self.send_presence_of_type(PresenceType::Subscribe, jid.clone())
    }

    pub fn unsubscribe_from_presence(&self, jid: &BareJid) -> Result<()> {
        self.send_presence_of_type(PresenceType::Unsubscribe, jid.clone())
    }

    /// Approves a subscription request.
    pub fn send_subscribed(&self, to: &Jid) -> Result<()> {
        self.send_presence_of_type(PresenceType::Subscribed, to.clone())
    }

    /// Acknowledges a cancelled subscription or denies a subscription request.
    pub fn send_unsubscribed(&self, to: &Jid) -> Result<()> {
        self.send_presence_of_type(PresenceType::Unsubscribed, to.clone())
    }

    fn send_presence_of_type(&self, r#type: PresenceType, to: impl Into<Jid>) -> Result<()> {
        self.inner.send_stanza(Presence::new(r#type).with_to(to))
    }
}

pub(super) struct ClientInner {
    pub connector_provider: ConnectorProvider,
    pub id_provider: Box<dyn IDProvider>,
    pub event_handler: EventHandler,
    pub jid: RwLock<Option<FullJid>>,
    pub connection: RwLock<Option<Box<dyn Connection>>>,
    pub pending_requests: Mutex<PendingRequests>,
}

impl ClientInner {
    async fn connect(
        self: &Arc<Self>,
        jid: &FullJid,
        password: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.disconnect();

        *self.jid.write() = Some(jid.clone());

        let client = Arc::downgrade(self);
        let connection = (self.connector_provider)()
            .connect(
                jid,
                password,
                Box::new(move |event| {
                    if let Some(client) = client.upgrade() {
                        client.handle_connection_event(event)
                    }
                }),
            )
            .await?;

        self.connection.write().replace(connection);
        self.emit(Event::Connected);

        Ok(())
    }

    fn disconnect(&self) {
        let connection = self.connection.write().take();
        if let Some(connection) = connection {
            connection.disconnect()
        }
    }

    pub(super) fn send_stanza(&self, stanza: impl Into<Element>) -> Result<()> {
        let stanza = stanza.into();

        #[cfg(feature = "trace-stanzas")]
        tracing::trace!(direction = "OUT", "{}", String::from(&stanza));

        let connection = self.connection.read();
        let Some(connection) = connection.as_ref() else {
            return Err(format_err!("Client is not connected."));
        };
        connection.send_stanza(stanza)
    }

    async fn send_iq(&self, iq: Iq) -> Result<Option<Element>, RequestError> {
        let id = iq.id.clone();
        let response = self.pending_requests.lock().insert(&id, Instant::now());

        if let Err(err) = self.send_stanza(iq) {
            self.pending_requests.lock().remove(&id);
            return Err(RequestError::Generic {
                msg: err.to_string(),
            });
        }

        response.await.unwrap_or(Err(RequestError::Disconnected))
    }

    pub(super) fn full_jid(&self) -> Result<FullJid> {
        self.jid
            .read()
            .clone()
            .ok_or(format_err!("Client is not connected."))
    }

    pub(super) fn bare_jid(&self) -> Result<BareJid> {
        Ok(self.full_jid()?.into_bare())
    }

    pub(super) fn emit(&self, event: Event) {
        (self.event_handler)(event)
    }

    fn handle_connection_event(self: Arc<Self>, event: ConnectionEvent) {
        match event {
            ConnectionEvent::Disconnected { error } => {
                self.pending_requests.lock().fail_all();
                self.emit(Event::Disconnected { error })
            }
            ConnectionEvent::Stanza(stanza) => self.handle_stanza(stanza),
            ConnectionEvent::TimeoutTimer => {
                self.pending_requests.lock().fail_expired(Instant::now());
            }
            ConnectionEvent::PingTimer => {
                tokio::spawn(async move {
                    if let Err(err) = self.send_ping().await {
                        warn!("Failed to send ping. {}", err)
                    }
                });
            }
        }
    }

    /// XEP-0199: XMPP Ping
    /// https://xmpp.org/extensions/xep-0199.html
    async fn send_ping(&self) -> Result<()> {
        let mut iq = Iq::from_get(self.id_provider.new_id(), Ping);
        iq.from = Some(self.full_jid()?.into());

        match self.send_iq(iq).await {
            Ok(_) => Ok(()),
            Err(RequestError::TimedOut) => {
                info!("Ping timed out. Disconnecting…");
                self.disconnect();
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
