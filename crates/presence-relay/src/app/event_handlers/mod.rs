// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

pub use connection_event_handler::ConnectionEventHandler;
pub use contact_list_event_handler::ContactListEventHandler;
pub use event_handler_queue::ServerEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use presence_event_handler::PresenceEventHandler;
pub use relay_xmpp::Event as XMPPEvent;
pub use server_event::*;

use crate::domain::session::SessionState;

mod connection_event_handler;
mod contact_list_event_handler;
mod event_handler_queue;
mod messages_event_handler;
mod presence_event_handler;
mod server_event;

/// `ServerEventHandler` is a trait representing a handler for server events.
///
/// Handlers run synchronously on the relay's event loop and have exclusive access to the
/// session state. If a handler returns `None`, the event has been consumed and no further
/// processing should be done. If it returns `Some(event)`, the event is not consumed and
/// is passed to the next handler.
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    fn handle_event(
        &self,
        state: &mut SessionState,
        event: ServerEvent,
    ) -> Result<Option<ServerEvent>>;
}
