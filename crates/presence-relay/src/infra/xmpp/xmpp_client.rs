// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use relay_xmpp::{Client, ClientBuilder, ConnectorProvider, Event, IDProvider};

use crate::app::deps::AppDependencies;

#[derive(Clone)]
pub struct XMPPClient {
    pub(crate) client: Client,
}

impl XMPPClient {
    pub fn builder() -> XMPPClientBuilder {
        XMPPClientBuilder {
            builder: Client::builder(),
        }
    }
}

pub struct XMPPClientBuilder {
    builder: ClientBuilder,
}

impl XMPPClientBuilder {
    pub fn set_connector_provider(mut self, connector_provider: ConnectorProvider) -> Self {
        self.builder = self.builder.set_connector_provider(connector_provider);
        self
    }

    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.builder = self.builder.set_id_provider(id_provider);
        self
    }

    pub fn set_event_handler(mut self, handler: impl Fn(Event) + Send + Sync + 'static) -> Self {
        self.builder = self.builder.set_event_handler(handler);
        self
    }

    pub fn build(self) -> XMPPClient {
        XMPPClient {
            client: self.builder.build(),
        }
    }
}

impl From<XMPPClient> for AppDependencies {
    fn from(client: XMPPClient) -> Self {
        let client = Arc::new(client);

        AppDependencies {
            connection_service: client.clone(),
            contact_list_service: client.clone(),
            messaging_service: client,
        }
    }
}
