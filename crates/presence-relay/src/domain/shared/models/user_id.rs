// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use jid::{BareJid, Jid};

#[derive(Clone, PartialEq, Eq, Hash)]
/// Represents a contact's base identity, independent of the session it connects from.
pub struct UserId(BareJid);

impl UserId {
    /// The local part of the identity, if there is one.
    pub fn username(&self) -> Option<&str> {
        self.0.node_str()
    }

    pub fn domain(&self) -> &str {
        self.0.domain_str()
    }

    pub fn to_jid(&self) -> Jid {
        Jid::from(self.0.clone())
    }
}

impl From<BareJid> for UserId {
    fn from(value: BareJid) -> Self {
        UserId(value)
    }
}

impl From<Jid> for UserId {
    fn from(value: Jid) -> Self {
        UserId(value.into_bare())
    }
}

impl AsRef<BareJid> for UserId {
    fn as_ref(&self) -> &BareJid {
        &self.0
    }
}

impl Debug for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserId(s.parse::<BareJid>()?))
    }
}
