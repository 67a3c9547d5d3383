// presence-relay/relay-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client::{Client, ClientBuilder, ConnectorProvider, EventHandler};
pub use connector::{Connection, ConnectionError, Connector};
pub use event::Event;
pub use id_provider::{IDProvider, UUIDProvider};
pub use request_error::RequestError;
pub use xmpp_parsers::ns;

pub mod client;
pub mod connector;
mod event;
mod id_provider;
mod request_error;
mod stanza;

#[cfg(feature = "test")]
pub mod test;
