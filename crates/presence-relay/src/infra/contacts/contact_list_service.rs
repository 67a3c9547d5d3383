// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use jid::Jid;
use xmpp_parsers::roster::Subscription;

use crate::domain::contacts::models::Contact;
use crate::domain::contacts::services::ContactListService;
use crate::domain::shared::models::UserId;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl ContactListService for XMPPClient {
    async fn load_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self
            .client
            .load_roster()
            .await?
            .items
            .into_iter()
            .filter(|item| item.subscription != Subscription::Remove)
            .map(|item| Contact {
                id: UserId::from(item.jid),
                name: item.name,
                groups: item.groups.into_iter().map(|group| group.0).collect(),
                subscription: item.subscription.into(),
            })
            .collect();

        Ok(contacts)
    }

    fn update_contact(
        &self,
        user_id: &UserId,
        name: Option<String>,
        groups: Vec<String>,
    ) -> Result<()> {
        self.client
            .update_roster_item(user_id.as_ref(), name.as_deref(), &groups)
    }

    fn request_presence_sub(&self, to: &UserId) -> Result<()> {
        self.client.subscribe_to_presence(to.as_ref())
    }

    fn approve_presence_sub_request(&self, to: &Jid) -> Result<()> {
        self.client.send_subscribed(to)
    }

    fn cancel_presence_sub(&self, to: &UserId) -> Result<()> {
        self.client.unsubscribe_from_presence(to.as_ref())
    }

    fn approve_presence_unsub_request(&self, to: &Jid) -> Result<()> {
        self.client.send_unsubscribed(to)
    }
}
