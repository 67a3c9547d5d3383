// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::info;

use crate::app::event_handlers::{
    ContactListEvent, ContactListEventType, ServerEvent, ServerEventHandler,
};
use crate::domain::contacts::models::Contact;
use crate::domain::session::SessionState;

/// Applies roster pushes to the contact directory.
#[derive(Default)]
pub struct ContactListEventHandler {}

impl ServerEventHandler for ContactListEventHandler {
    fn name(&self) -> &'static str {
        "contact_list"
    }

    fn handle_event(
        &self,
        state: &mut SessionState,
        event: ServerEvent,
    ) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::ContactList(event) => self.handle_contact_list_event(state, event),
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ContactListEventHandler {
    fn handle_contact_list_event(&self, state: &mut SessionState, event: ContactListEvent) {
        match event.r#type {
            ContactListEventType::ContactAddedOrUpdated {
                name,
                groups,
                subscription,
            } => {
                info!(
                    "Subscription of {} is now '{}'",
                    state.pseudonym(&event.contact_id),
                    subscription
                );
                state.contacts.apply(Contact {
                    id: event.contact_id,
                    name,
                    groups,
                    subscription,
                });
            }
            ContactListEventType::ContactRemoved => {
                info!(
                    "{} was removed from our contacts",
                    state.pseudonym(&event.contact_id)
                );
                state.contacts.mark_removed(&event.contact_id);
            }
        }
    }
}
