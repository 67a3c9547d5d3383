// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_router::{MessageRouter, NICKNAME_CONFIRMATION};
pub use messaging_service::MessagingService;

mod message_router;
mod messaging_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::messaging_service::MockMessagingService;
}
