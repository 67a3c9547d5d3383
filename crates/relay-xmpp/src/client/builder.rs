// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use async_trait::async_trait;
use jid::FullJid;
use secrecy::Secret;

use crate::client::client::ClientInner;
use crate::client::{ConnectorProvider, EventHandler};
use crate::connector::{Connection, ConnectionError, ConnectionEventHandler, Connector};
use crate::{Client, Event, IDProvider, UUIDProvider};

struct UndefinedConnector {}

pub struct ClientBuilder {
    connector_provider: ConnectorProvider,
    id_provider: Box<dyn IDProvider>,
    event_handler: EventHandler,
}

impl ClientBuilder {
    pub(super) fn new() -> Self {
        ClientBuilder {
            connector_provider: Box::new(|| Box::new(UndefinedConnector {})),
            id_provider: Box::new(UUIDProvider::default()),
            event_handler: Box::new(|_| {}),
        }
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.connector_provider = connector_provider;
        self
    }

    pub fn set_event_handler(mut self, handler: impl Fn(Event) + Send + Sync + 'static) -> Self {
        self.event_handler = Box::new(handler);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Box::new(id_provider);
        self
    }

    pub fn build(self) -> Client {
        Client {
            inner: Arc::new(ClientInner {
                connector_provider: self.connector_provider,
                id_provider: self.id_provider,
                event_handler: self.event_handler,
                jid: Default::default(),
                connection: Default::default(),
                pending_requests: Default::default(),
            }),
        }
    }
}

#[async_trait]
impl Connector for UndefinedConnector {
    async fn connect(
        &self,
        _jid: &FullJid,
        _password: Secret<String>,
        _event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        Err(ConnectionError::Generic {
            msg: "Client doesn't have a connector. Provide one before calling connect()"
                .to_string(),
        })
    }
}
