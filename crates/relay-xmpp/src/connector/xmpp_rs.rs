// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use futures::stream::StreamExt;
use futures::SinkExt;
use jid::{FullJid, Jid};
use minidom::Element;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::{task, time};
use tokio_xmpp::{AsyncClient, Error, Event, Packet};
use tracing::{error, warn};

use crate::client::ConnectorProvider;
use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait,
};

const PING_INTERVAL: Duration = Duration::from_secs(60);
const TIMEOUT_INTERVAL: Duration = Duration::from_secs(2);

pub struct Connector {}

impl Connector {
    pub fn provider() -> ConnectorProvider {
        Box::new(|| Box::new(Connector {}))
    }
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        async fn connect(
            jid: &FullJid,
            password: impl Into<String>,
        ) -> Result<AsyncClient, ConnectionError> {
            let mut client = AsyncClient::new(Jid::from(jid.clone()), password);
            // Reconnecting is left to whoever owns the client.
            client.set_reconnect(false);

            while let Some(event) = client.next().await {
                match event {
                    Event::Disconnected(Error::Auth(_)) => {
                        return Err(ConnectionError::InvalidCredentials);
                    }
                    Event::Disconnected(e) => {
                        return Err(ConnectionError::Generic { msg: e.to_string() });
                    }
                    Event::Online { .. } => return Ok(client),
                    Event::Stanza(stanza) => {
                        return Err(ConnectionError::Generic {
                            msg: format!("Received unexpected stanza {:?}", stanza),
                        });
                    }
                }
            }

            Err(ConnectionError::Generic {
                msg: "Stream ended before the session was established".to_string(),
            })
        }

        connect(jid, password.expose_secret().as_str())
            .await
            .map(|client| {
                Box::new(Connection::new(client, event_handler)) as Box<dyn ConnectionTrait>
            })
    }
}

pub struct Connection {
    sender: UnboundedSender<Packet>,
    _read_handle: JoinHandle<()>,
    _write_handle: JoinHandle<()>,
}

impl Connection {
    fn new(client: AsyncClient, event_handler: ConnectionEventHandler) -> Self {
        let (sender, mut rx) = mpsc::unbounded_channel();
        let (mut writer, mut reader) = client.split();
        let event_handler = Arc::new(event_handler);

        let ping_handle = Self::spawn_timer(event_handler.clone(), PING_INTERVAL, || {
            ConnectionEvent::PingTimer
        });
        let timeout_handle = Self::spawn_timer(event_handler.clone(), TIMEOUT_INTERVAL, || {
            ConnectionEvent::TimeoutTimer
        });

        let read_handle = task::spawn(async move {
            let mut error = None;

            while let Some(event) = reader.next().await {
                match event {
                    Event::Disconnected(err) => {
                        error = Some(ConnectionError::Generic {
                            msg: err.to_string(),
                        });
                        break;
                    }
                    Event::Online { .. } => (),
                    Event::Stanza(stanza) => (event_handler)(ConnectionEvent::Stanza(stanza)),
                }
            }

            ping_handle.abort();
            timeout_handle.abort();
            (event_handler)(ConnectionEvent::Disconnected { error });
        });

        let write_handle = task::spawn(async move {
            while let Some(packet) = rx.recv().await {
                let is_stream_end = matches!(packet, Packet::StreamEnd);

                if let Err(err) = writer.send(packet).await {
                    error!("cannot send Stanza to internal channel: {}", err);
                    break;
                }
                if is_stream_end {
                    break;
                }
            }
            if let Err(err) = writer.close().await {
                warn!("Failed to close XMPP stream. {}", err);
            }
        });

        Connection {
            sender,
            _read_handle: read_handle,
            _write_handle: write_handle,
        }
    }

    fn spawn_timer(
        event_handler: Arc<ConnectionEventHandler>,
        period: Duration,
        event: fn() -> ConnectionEvent,
    ) -> JoinHandle<()> {
        task::spawn(async move {
            let mut interval = time::interval(period);
            // The first tick completes immediately.
            interval.tick().await;

            loop {
                interval.tick().await;
                (event_handler)(event());
            }
        })
    }
}

impl ConnectionTrait for Connection {
    fn send_stanza(&self, stanza: Element) -> Result<()> {
        self.sender.send(Packet::Stanza(stanza))?;
        Ok(())
    }

    fn disconnect(&self) {
        if self.sender.send(Packet::StreamEnd).is_err() {
            warn!("Tried to disconnect an already closed connection.")
        }
    }
}
