// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use xmpp_parsers::roster::{Item, Subscription};

use crate::app::event_handlers::{
    ConnectionEvent, ContactListEvent, ContactListEventType, MessageEvent, MessageEventType,
    ServerEvent, XMPPEvent,
};
use crate::domain::shared::models::{ContactId, UserId};

use message::parse_message;
use presence::parse_presence;

mod message;
mod presence;

/// Translates an event of the XMPP client into the events the relay's handlers act upon.
pub fn parse_xmpp_event(event: XMPPEvent) -> Result<Vec<ServerEvent>> {
    let mut ctx = Context::default();

    match event {
        XMPPEvent::Connected => ctx.push_event(ConnectionEvent::Connected),
        XMPPEvent::Disconnected { error } => {
            ctx.push_event(ConnectionEvent::Disconnected { error })
        }
        XMPPEvent::Message(message) => parse_message(&mut ctx, message)?,
        XMPPEvent::ChatStateChanged {
            from,
            message_type,
            ..
        } => ctx.push_event(MessageEvent {
            from: ContactId::from(from),
            message_type,
            r#type: MessageEventType::ComposeStateChanged,
        }),
        XMPPEvent::Presence(presence) => parse_presence(&mut ctx, presence)?,
        XMPPEvent::RosterPush(item) => parse_roster_push(&mut ctx, item),
    };

    Ok(ctx.events)
}

#[derive(Debug, Default)]
struct Context {
    events: Vec<ServerEvent>,
}

impl Context {
    pub fn push_event(&mut self, event: impl Into<ServerEvent>) {
        self.events.push(event.into())
    }
}

fn parse_roster_push(ctx: &mut Context, item: Item) {
    let r#type = match item.subscription {
        Subscription::Remove => ContactListEventType::ContactRemoved,
        subscription => ContactListEventType::ContactAddedOrUpdated {
            name: item.name,
            groups: item.groups.into_iter().map(|group| group.0).collect(),
            subscription: subscription.into(),
        },
    };

    ctx.push_event(ContactListEvent {
        contact_id: UserId::from(item.jid),
        r#type,
    })
}
