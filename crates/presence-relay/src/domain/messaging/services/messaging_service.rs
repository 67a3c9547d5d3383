// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::Jid;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagingService: Send + Sync {
    /// Sends a chat message. Delivery is not confirmed.
    fn send_message(&self, to: Jid, body: String) -> Result<()>;
}
