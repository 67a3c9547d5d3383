// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};
use xmpp_parsers::roster;

/// The mutual presence visibility between the relay and a contact. Only `Both` makes a
/// contact eligible to receive relayed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PresenceSubscription {
    #[default]
    None,
    To,
    From,
    Both,
}

impl PresenceSubscription {
    pub fn is_mutual(&self) -> bool {
        *self == PresenceSubscription::Both
    }
}

impl From<roster::Subscription> for PresenceSubscription {
    fn from(value: roster::Subscription) -> Self {
        match value {
            roster::Subscription::None | roster::Subscription::Remove => Self::None,
            roster::Subscription::To => Self::To,
            roster::Subscription::From => Self::From,
            roster::Subscription::Both => Self::Both,
        }
    }
}
