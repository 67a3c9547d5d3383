// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::user_info::models::Availability;

/// Liveness and status of a single session of a contact.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Presence {
    pub availability: Availability,
    pub status: Option<String>,
    pub priority: i8,
}
