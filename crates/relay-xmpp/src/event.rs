// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;
use xmpp_parsers::chatstates::ChatState;
use xmpp_parsers::message::{Message, MessageType};
use xmpp_parsers::presence::Presence;
use xmpp_parsers::roster::Item;

use crate::connector::ConnectionError;

#[derive(Debug, Clone)]
pub enum Event {
    Connected,
    Disconnected {
        error: Option<ConnectionError>,
    },
    /// A message with content other than a chat state.
    Message(Message),
    ChatStateChanged {
        from: Jid,
        chat_state: ChatState,
        message_type: MessageType,
    },
    Presence(Presence),
    /// The server pushed a changed roster item, i.e. after a subscription state change.
    RosterPush(Item),
}
