// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::app::deps::AppDependencies;
use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::domain::contacts::services::SubscriptionNegotiator;
use crate::domain::session::SessionState;

/// Hands presence stanzas to the subscription negotiator. Probes and errors are declined.
pub struct PresenceEventHandler {
    negotiator: SubscriptionNegotiator,
}

impl From<&AppDependencies> for PresenceEventHandler {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            negotiator: SubscriptionNegotiator::from(deps),
        }
    }
}

impl ServerEventHandler for PresenceEventHandler {
    fn name(&self) -> &'static str {
        "presence"
    }

    fn handle_event(
        &self,
        state: &mut SessionState,
        event: ServerEvent,
    ) -> Result<Option<ServerEvent>> {
        let ServerEvent::Presence(event) = event else {
            return Ok(Some(event));
        };

        let handled = self.negotiator.handle_presence(
            state,
            &event.from,
            event.r#type,
            event.presence.clone(),
        )?;

        if !handled {
            return Ok(Some(ServerEvent::Presence(event)));
        }
        Ok(None)
    }
}
