// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact::Contact;
pub use presence_subscription::PresenceSubscription;

mod contact;
mod presence_subscription;
