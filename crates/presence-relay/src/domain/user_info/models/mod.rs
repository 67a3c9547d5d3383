// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use availability::Availability;
pub use presence::Presence;
pub use presence_type::PresenceType;

mod availability;
mod presence;
mod presence_type;
