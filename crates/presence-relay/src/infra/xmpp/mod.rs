// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use event_parser::parse_xmpp_event;
pub use xmpp_client::{XMPPClient, XMPPClientBuilder};

mod event_parser;
mod xmpp_client;
