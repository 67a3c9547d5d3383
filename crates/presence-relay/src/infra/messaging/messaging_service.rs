// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::Jid;

use crate::domain::messaging::services::MessagingService;
use crate::infra::xmpp::XMPPClient;

impl MessagingService for XMPPClient {
    fn send_message(&self, to: Jid, body: String) -> Result<()> {
        self.client.send_message(to, body)
    }
}
