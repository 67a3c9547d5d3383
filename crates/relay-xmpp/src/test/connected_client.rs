// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use secrecy::Secret;

use crate::test::{Connection, Connector, IncrementingIDProvider};
use crate::{full, Client, Event};

/// A client connected as `relay@prose.org/test` through an in-memory connection.
pub struct ConnectedClient {
    pub client: Client,
    pub connection: Arc<Connection>,
    events: Arc<Mutex<Vec<Event>>>,
}

impl ConnectedClient {
    pub async fn connect() -> Result<Self> {
        let connection = Arc::new(Connection::default());
        let id_provider = Arc::new(IncrementingIDProvider::new("id"));
        let events = Arc::new(Mutex::new(vec![]));

        let handler_events = events.clone();
        let client = Client::builder()
            .set_connector_provider(Connector::provider(connection.clone()))
            .set_id_provider(id_provider.clone())
            .set_event_handler(move |event| handler_events.lock().push(event))
            .build();

        client
            .connect(&full!("relay@prose.org/test"), Secret::new(String::new()))
            .await?;

        id_provider.reset();
        events.lock().clear();

        Ok(ConnectedClient {
            client,
            connection,
            events,
        })
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }
}
