// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact_id::ContactId;
pub use user_id::UserId;

mod contact_id;
mod user_id;
