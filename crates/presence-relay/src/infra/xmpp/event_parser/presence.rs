// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use xmpp_parsers::presence::Presence as XMPPPresence;

use crate::app::event_handlers::PresenceEvent;
use crate::domain::shared::models::ContactId;
use crate::domain::user_info::models::{Availability, Presence, PresenceType};
use crate::infra::xmpp::event_parser::Context;

pub(super) fn parse_presence(ctx: &mut Context, presence: XMPPPresence) -> Result<()> {
    let Some(from) = presence.from else {
        bail!("Missing 'from' attribute in presence")
    };

    let status = presence
        .statuses
        .get("")
        .or_else(|| presence.statuses.values().next())
        .cloned();

    ctx.push_event(PresenceEvent {
        from: ContactId::from(from),
        r#type: PresenceType::from(presence.type_),
        presence: Presence {
            availability: Availability::from(presence.show),
            status,
            priority: presence.priority,
        },
    });

    Ok(())
}
