// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::Jid;

use crate::domain::contacts::models::Contact;
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ContactListService: Send + Sync {
    async fn load_contacts(&self) -> Result<Vec<Contact>>;

    /// Stores `name` and `groups` in our roster. Does not wait for the server.
    fn update_contact(&self, user_id: &UserId, name: Option<String>, groups: Vec<String>)
        -> Result<()>;

    fn request_presence_sub(&self, to: &UserId) -> Result<()>;
    fn approve_presence_sub_request(&self, to: &Jid) -> Result<()>;
    fn cancel_presence_sub(&self, to: &UserId) -> Result<()>;
    fn approve_presence_unsub_request(&self, to: &Jid) -> Result<()>;
}
