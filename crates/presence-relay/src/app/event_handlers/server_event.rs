// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::message::MessageType;

use relay_xmpp::ConnectionError;

use crate::domain::contacts::models::PresenceSubscription;
use crate::domain::shared::models::{ContactId, UserId};
use crate::domain::user_info::models::{Presence, PresenceType};

#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    /// Event related to the connection status.
    Connection(ConnectionEvent),
    /// Changes to our roster, pushed by the server.
    ContactList(ContactListEvent),
    /// Subscription handshakes and availability announcements.
    Presence(PresenceEvent),
    /// Events about received messages.
    Message(MessageEvent),
}

impl ServerEvent {
    /// Returns true for the event after which no further events will arrive.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ServerEvent::Connection(ConnectionEvent::Disconnected { .. })
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Connected,
    Disconnected { error: Option<ConnectionError> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactListEvent {
    pub contact_id: UserId,
    pub r#type: ContactListEventType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactListEventType {
    /// The contact was either added to our roster or its name, groups or subscription
    /// changed.
    ContactAddedOrUpdated {
        name: Option<String>,
        groups: Vec<String>,
        subscription: PresenceSubscription,
    },
    /// The contact was removed from our roster.
    ContactRemoved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresenceEvent {
    pub from: ContactId,
    pub r#type: PresenceType,
    pub presence: Presence,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    pub from: ContactId,
    pub message_type: MessageType,
    pub r#type: MessageEventType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageEventType {
    Received { body: Option<String> },
    /// A chat state notification without any content.
    ComposeStateChanged,
}

impl From<ConnectionEvent> for ServerEvent {
    fn from(value: ConnectionEvent) -> Self {
        ServerEvent::Connection(value)
    }
}

impl From<ContactListEvent> for ServerEvent {
    fn from(value: ContactListEvent) -> Self {
        ServerEvent::ContactList(value)
    }
}

impl From<PresenceEvent> for ServerEvent {
    fn from(value: PresenceEvent) -> Self {
        ServerEvent::Presence(value)
    }
}

impl From<MessageEvent> for ServerEvent {
    fn from(value: MessageEvent) -> Self {
        ServerEvent::Message(value)
    }
}
