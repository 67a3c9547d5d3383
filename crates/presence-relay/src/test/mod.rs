// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;

pub use mock_app_dependencies::MockAppDependencies;

use crate::domain::session::SessionState;


pub const TEST_SALT: &str = "test-salt";

#[macro_export]
macro_rules! user_id {
    ($jid:expr) => {
        $crate::domain::shared::models::UserId::from($jid.parse::<jid::BareJid>().unwrap())
    };
}

#[macro_export]
macro_rules! contact_id {
    ($jid:expr) => {
        $crate::domain::shared::models::ContactId::from($jid.parse::<jid::Jid>().unwrap())
    };
}

pub fn session_state() -> SessionState {
    SessionState::new(Secret::new(TEST_SALT.to_string()))
}
