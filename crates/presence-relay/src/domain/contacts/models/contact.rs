// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::contacts::models::PresenceSubscription;
use crate::domain::shared::models::UserId;

/// An entry of the contact directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: UserId,
    pub name: Option<String>,
    pub groups: Vec<String>,
    pub subscription: PresenceSubscription,
}

impl Contact {
    pub fn new(id: UserId) -> Self {
        Contact {
            id,
            name: None,
            groups: vec![],
            subscription: PresenceSubscription::None,
        }
    }

    /// The stored name unless it is empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
