// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::info;

use crate::app::deps::{AppDependencies, DynContactListService};
use crate::domain::session::SessionState;
use crate::domain::shared::models::ContactId;
use crate::domain::user_info::models::{Presence, PresenceType};

/// Answers subscription requests and keeps the presence store in sync with the
/// availability announcements of our contacts.
///
/// Every request is accepted and mirrored back to the requester's base identity. All
/// operations tolerate duplicate and out-of-order events.
pub struct SubscriptionNegotiator {
    contact_list_service: DynContactListService,
}

impl From<&AppDependencies> for SubscriptionNegotiator {
    fn from(deps: &AppDependencies) -> Self {
        Self::new(deps.contact_list_service.clone())
    }
}

impl SubscriptionNegotiator {
    pub fn new(contact_list_service: DynContactListService) -> Self {
        Self {
            contact_list_service,
        }
    }

    /// Returns `false` if `presence_type` is neither a subscription nor an availability
    /// change, i.e. a probe or an error.
    pub fn handle_presence(
        &self,
        state: &mut SessionState,
        from: &ContactId,
        presence_type: PresenceType,
        presence: Presence,
    ) -> Result<bool> {
        match presence_type {
            PresenceType::Subscribe => self.handle_subscription_request(state, from)?,
            PresenceType::Subscribed => {
                state.contacts.get_or_insert(from.user_id());
                info!("{} accepted our subscription request", log_id(state, from));
            }
            PresenceType::Unsubscribe => self.handle_unsubscription_request(state, from)?,
            PresenceType::Unsubscribed => {
                state.contacts.get_or_insert(from.user_id());
                info!(
                    "{} acknowledged our subscription cancellation",
                    log_id(state, from)
                );
            }
            PresenceType::Available => Self::handle_available(state, from, presence),
            PresenceType::Unavailable => Self::handle_unavailable(state, from),
            PresenceType::Probe | PresenceType::Error => return Ok(false),
        }
        Ok(true)
    }

    fn handle_subscription_request(&self, state: &mut SessionState, from: &ContactId) -> Result<()> {
        state.contacts.get_or_insert(from.user_id());
        info!("{} requested presence subscription", log_id(state, from));

        self.contact_list_service
            .approve_presence_sub_request(&from.to_jid())?;
        self.contact_list_service
            .request_presence_sub(from.user_id())?;
        Ok(())
    }

    fn handle_unsubscription_request(
        &self,
        state: &mut SessionState,
        from: &ContactId,
    ) -> Result<()> {
        state.contacts.get_or_insert(from.user_id());
        info!("{} canceled presence subscription", log_id(state, from));

        self.contact_list_service
            .approve_presence_unsub_request(&from.to_jid())?;
        self.contact_list_service.cancel_presence_sub(from.user_id())?;
        Ok(())
    }

    fn handle_available(state: &mut SessionState, from: &ContactId, presence: Presence) {
        state.contacts.get_or_insert(from.user_id());
        info!("{}[{}]", log_id(state, from), presence.availability);
        state.presences.mark_available(from, presence);
    }

    fn handle_unavailable(state: &mut SessionState, from: &ContactId) {
        if state.presences.mark_unavailable(from).is_some() {
            info!("{}[unavailable]", log_id(state, from));
        }
    }
}

fn log_id(state: &mut SessionState, id: &ContactId) -> String {
    let pseudonym = state.pseudonym(id.user_id());
    match id.resource() {
        Some(resource) => format!("{}/{}", pseudonym, resource),
        None => pseudonym,
    }
}
