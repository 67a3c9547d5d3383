// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{debug, info};

use crate::app::deps::{AppDependencies, DynContactListService, DynMessagingService};
use crate::domain::messaging::models::Command;
use crate::domain::session::SessionState;
use crate::domain::shared::models::{ContactId, UserId};

pub const NICKNAME_CONFIRMATION: &str = "Nickname updated.";

/// Executes the commands contained in chat messages and relays everything else to the
/// online contacts.
pub struct MessageRouter {
    contact_list_service: DynContactListService,
    messaging_service: DynMessagingService,
}

impl From<&AppDependencies> for MessageRouter {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            contact_list_service: deps.contact_list_service.clone(),
            messaging_service: deps.messaging_service.clone(),
        }
    }
}

impl MessageRouter {
    /// Routes a message received from `from`. Messages without body are typing
    /// notifications and are dropped.
    pub fn route_message(
        &self,
        state: &mut SessionState,
        from: &ContactId,
        body: Option<&str>,
    ) -> Result<()> {
        let sender = from.user_id();

        let Some(body) = body else {
            debug!("{} is typing", state.pseudonym(sender));
            return Ok(());
        };

        info!("[{}] {}", state.pseudonym(sender), body);

        match Command::parse(body) {
            None => Ok(()),
            Some(Command::Ping) => self
                .messaging_service
                .send_message(sender.to_jid(), "pong".to_string()),
            Some(Command::ChangeNickname(nickname)) => {
                self.change_nickname(state, from, nickname)
            }
            Some(Command::Broadcast(text)) => self.broadcast(state, sender, text),
        }
    }

    /// Relays `text` to every online contact except `sender`, prefixed with the
    /// sender's display name.
    pub fn broadcast(&self, state: &mut SessionState, sender: &UserId, text: &str) -> Result<()> {
        let body = format!("[{}] {}", state.display_name(sender), text);
        self.send_to_online_contacts(state, sender, &body)
    }

    /// Stores the new name, confirms the change to the requester and announces it to
    /// everyone else who is online. The announcement is not prefixed.
    pub fn change_nickname(
        &self,
        state: &mut SessionState,
        requester: &ContactId,
        nickname: &str,
    ) -> Result<()> {
        let user_id = requester.user_id();
        let old_name = state.display_name(user_id);

        // The local name only changes once the roster update went out.
        let groups = state
            .contacts
            .lookup(user_id)
            .map(|contact| contact.groups.clone())
            .unwrap_or_default();
        self.contact_list_service
            .update_contact(user_id, Some(nickname.to_string()), groups)?;
        state.contacts.upsert_name(user_id, nickname);

        self.messaging_service
            .send_message(requester.to_jid(), NICKNAME_CONFIRMATION.to_string())?;

        let announcement = format!("{} is now known as {}.", old_name, nickname);
        self.send_to_online_contacts(state, user_id, &announcement)
    }

    fn send_to_online_contacts(
        &self,
        state: &mut SessionState,
        except: &UserId,
        body: &str,
    ) -> Result<()> {
        for contact in state.online_contacts() {
            if &contact.id == except {
                continue;
            }
            self.messaging_service
                .send_message(contact.id.to_jid(), body.to_string())?;
        }
        Ok(())
    }
}
