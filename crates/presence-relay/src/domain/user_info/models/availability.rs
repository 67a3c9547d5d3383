// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};
use xmpp_parsers::presence::Show;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Chat,
    Away,
    #[strum(serialize = "dnd")]
    DoNotDisturb,
    #[strum(serialize = "xa")]
    ExtendedAway,
}

impl From<Option<Show>> for Availability {
    fn from(value: Option<Show>) -> Self {
        match value {
            None => Availability::Available,
            Some(Show::Chat) => Availability::Chat,
            Some(Show::Away) => Availability::Away,
            Some(Show::Dnd) => Availability::DoNotDisturb,
            Some(Show::Xa) => Availability::ExtendedAway,
        }
    }
}
