// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::FullJid;
use secrecy::Secret;

use relay_xmpp::ConnectionError;

use crate::domain::connection::services::ConnectionService;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl ConnectionService for XMPPClient {
    async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
    ) -> Result<(), ConnectionError> {
        self.client.connect(jid, password).await
    }

    fn disconnect(&self) {
        self.client.disconnect()
    }

    fn send_initial_presence(&self, priority: i8) -> Result<()> {
        self.client.send_presence(priority)
    }
}
