// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use identity_anonymizer::IdentityAnonymizer;
pub use session_state::SessionState;

mod identity_anonymizer;
mod session_state;
