// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;
use xmpp_parsers::presence::Type;

/// The type of an inbound presence stanza. A presence without type attribute announces
/// availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PresenceType {
    Available,
    Unavailable,
    Subscribe,
    Subscribed,
    Unsubscribe,
    Unsubscribed,
    Probe,
    Error,
}

impl From<Type> for PresenceType {
    fn from(value: Type) -> Self {
        match value {
            Type::None => Self::Available,
            Type::Unavailable => Self::Unavailable,
            Type::Subscribe => Self::Subscribe,
            Type::Subscribed => Self::Subscribed,
            Type::Unsubscribe => Self::Unsubscribe,
            Type::Unsubscribed => Self::Unsubscribed,
            Type::Probe => Self::Probe,
            Type::Error => Self::Error,
        }
    }
}
