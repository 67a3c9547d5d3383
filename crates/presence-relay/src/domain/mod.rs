// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod connection;
pub mod contacts;
pub mod messaging;
pub mod session;
pub mod shared;
pub mod user_info;
