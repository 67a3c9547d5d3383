// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;
use tokio::sync::mpsc;
use tracing::{error, warn};

use relay_xmpp::connector::xmpp_rs;
use relay_xmpp::{ConnectorProvider, IDProvider};

use crate::app::deps::AppDependencies;
use crate::infra::xmpp::{parse_xmpp_event, XMPPClient, XMPPClientBuilder};
use crate::relay::{Relay, RelayHandle};

pub struct RelayBuilder {
    builder: XMPPClientBuilder,
    salt: Secret<String>,
}

impl RelayBuilder {
    pub(crate) fn new(salt: Secret<String>) -> Self {
        RelayBuilder {
            builder: XMPPClient::builder().set_connector_provider(xmpp_rs::Connector::provider()),
            salt,
        }
    }

    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.builder = self.builder.set_connector_provider(connector_provider);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.builder = self.builder.set_id_provider(id_provider);
        self
    }

    pub fn build(self) -> (Relay, RelayHandle) {
        let (tx, rx) = mpsc::unbounded_channel();

        // Events are parsed and queued synchronously so that they keep their order.
        let client = self
            .builder
            .set_event_handler(move |event| match parse_xmpp_event(event) {
                Ok(events) => {
                    for event in events {
                        if tx.send(event).is_err() {
                            warn!("Dropping event. The relay is not running anymore.");
                        }
                    }
                }
                Err(err) => error!("Failed to parse event. {}", err),
            })
            .build();

        Relay::new(AppDependencies::from(client), self.salt, rx)
    }
}
