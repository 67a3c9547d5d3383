// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact_list_service::ContactListService;
pub use subscription_negotiator::SubscriptionNegotiator;

mod contact_list_service;
mod subscription_negotiator;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::contact_list_service::MockContactListService;
}
