// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{info, warn};

use crate::app::event_handlers::{ConnectionEvent, ServerEvent, ServerEventHandler};
use crate::domain::session::SessionState;

#[derive(Default)]
pub struct ConnectionEventHandler {}

impl ServerEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    fn handle_event(
        &self,
        _state: &mut SessionState,
        event: ServerEvent,
    ) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Connection(event) => self.handle_connection_event(event),
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConnectionEventHandler {
    fn handle_connection_event(&self, event: ConnectionEvent) {
        match event {
            ConnectionEvent::Connected => info!("Connected."),
            ConnectionEvent::Disconnected { error: None } => info!("Disconnected."),
            ConnectionEvent::Disconnected { error: Some(error) } => {
                warn!("Disconnected with error: {}", error)
            }
        }
    }
}
