// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::connector::Connector;
use crate::Event;
pub use builder::ClientBuilder;
pub use client::Client;

mod builder;
mod client;
mod inbound;
mod pending_requests;

/// Invoked synchronously for every event, in the order in which the stanzas arrived.
pub type EventHandler = Box<dyn Fn(Event) + Send + Sync>;

pub type ConnectorProvider = Box<dyn Fn() -> Box<dyn Connector> + Send + Sync>;
