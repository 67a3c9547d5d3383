// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use jid::Jid;

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A base identity plus the optional resource of the session an event originated from.
/// Contacts sending from a bare JID are identified by the `None` resource.
pub struct ContactId {
    jid: Jid,
    user_id: UserId,
}

impl ContactId {
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn to_user_id(&self) -> UserId {
        self.user_id.clone()
    }

    pub fn resource(&self) -> Option<&str> {
        self.jid.resource_str()
    }

    pub fn to_jid(&self) -> Jid {
        self.jid.clone()
    }
}

impl From<Jid> for ContactId {
    fn from(value: Jid) -> Self {
        ContactId {
            user_id: UserId::from(value.clone()),
            jid: value,
        }
    }
}

impl From<UserId> for ContactId {
    fn from(value: UserId) -> Self {
        ContactId {
            jid: value.to_jid(),
            user_id: value,
        }
    }
}

impl FromStr for ContactId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ContactId::from(s.parse::<Jid>()?))
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.jid)
    }
}
