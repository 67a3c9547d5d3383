// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact_directory::ContactDirectory;
pub use online_set_resolver::online_contacts;

mod contact_directory;
pub mod models;
mod online_set_resolver;
pub mod services;
