// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{debug, error};

use crate::app::deps::AppDependencies;
use crate::app::event_handlers::{
    ConnectionEventHandler, ContactListEventHandler, MessagesEventHandler,
    PresenceEventHandler, ServerEvent, ServerEventHandler,
};
use crate::domain::session::SessionState;

/// Offers each event to its handlers in order until one of them consumes it.
pub struct ServerEventHandlerQueue {
    handlers: Vec<Box<dyn ServerEventHandler>>,
}

impl ServerEventHandlerQueue {
    pub fn new(handlers: Vec<Box<dyn ServerEventHandler>>) -> Self {
        Self { handlers }
    }

    /// Returns false if no handler claimed the event.
    pub fn handle_event(&self, state: &mut SessionState, event: ServerEvent) -> bool {
        debug!("-- {:?}", event);

        let mut event = event;

        for handler in self.handlers.iter() {
            match handler.handle_event(state, event) {
                Ok(None) => return true,
                Ok(Some(e)) => event = e,
                Err(err) => {
                    error!(
                        "Event handler '{}' aborted with error: {}",
                        handler.name(),
                        err.to_string()
                    );
                    return true;
                }
            }
        }

        debug!("Unhandled event {:?}", event);
        false
    }
}

impl From<&AppDependencies> for ServerEventHandlerQueue {
    /// Connection events are handled first, chat messages last.
    fn from(deps: &AppDependencies) -> Self {
        Self::new(vec![
            Box::new(ConnectionEventHandler::default()),
            Box::new(ContactListEventHandler::default()),
            Box::new(PresenceEventHandler::from(deps)),
            Box::new(MessagesEventHandler::from(deps)),
        ])
    }
}
