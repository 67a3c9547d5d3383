// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::event_handlers::ServerEvent;
pub use domain::session::SessionState;
pub use relay::{Relay, RelayHandle, INITIAL_PRESENCE_PRIORITY, SHUTDOWN_GRACE_PERIOD};
pub use relay_builder::RelayBuilder;

pub mod app;
pub mod domain;
pub mod infra;
mod relay;
mod relay_builder;

#[cfg(feature = "test")]
pub mod test;
