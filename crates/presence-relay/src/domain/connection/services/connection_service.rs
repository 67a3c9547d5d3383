// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::FullJid;
use secrecy::Secret;

use relay_xmpp::ConnectionError;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConnectionService: Send + Sync {
    async fn connect(&self, jid: &FullJid, password: Secret<String>)
        -> Result<(), ConnectionError>;
    /// Requests the connection to be closed. The connection confirms with a
    /// `Disconnected` event.
    fn disconnect(&self);

    /// Announces our own availability with the given priority.
    fn send_initial_presence(&self, priority: i8) -> Result<()>;
}
