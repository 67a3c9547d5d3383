// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use xmpp_parsers::message::MessageType;

use crate::app::deps::AppDependencies;
use crate::app::event_handlers::{MessageEvent, MessageEventType, ServerEvent, ServerEventHandler};
use crate::domain::messaging::services::MessageRouter;
use crate::domain::session::SessionState;

/// Routes chat messages. Group chat, headline and error messages are declined.
pub struct MessagesEventHandler {
    router: MessageRouter,
}

impl From<&AppDependencies> for MessagesEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            router: MessageRouter::from(deps),
        }
    }
}

impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    fn handle_event(
        &self,
        state: &mut SessionState,
        event: ServerEvent,
    ) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Message(event)
                if matches!(event.message_type, MessageType::Chat | MessageType::Normal) =>
            {
                self.handle_message_event(state, event)?
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl MessagesEventHandler {
    fn handle_message_event(&self, state: &mut SessionState, event: MessageEvent) -> Result<()> {
        match event.r#type {
            MessageEventType::Received { body } => {
                self.router
                    .route_message(state, &event.from, body.as_deref())
            }
            // Typing notifications are acknowledged and dropped.
            MessageEventType::ComposeStateChanged => Ok(()),
        }
    }
}
