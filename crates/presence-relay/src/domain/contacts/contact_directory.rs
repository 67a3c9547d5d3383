// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;

use crate::domain::contacts::models::{Contact, PresenceSubscription};
use crate::domain::shared::models::UserId;

/// The known contacts in the order in which they were first seen. Entries are never
/// deleted for the lifetime of a session.
#[derive(Debug, Default)]
pub struct ContactDirectory {
    contacts: IndexMap<UserId, Contact>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, user_id: &UserId) -> Option<&Contact> {
        self.contacts.get(user_id)
    }

    /// Returns the entry for `user_id`, creating one without subscription if needed.
    pub fn get_or_insert(&mut self, user_id: &UserId) -> &mut Contact {
        self.contacts
            .entry(user_id.clone())
            .or_insert_with(|| Contact::new(user_id.clone()))
    }

    pub fn upsert_name(&mut self, user_id: &UserId, name: impl Into<String>) -> &Contact {
        let contact = self.get_or_insert(user_id);
        contact.name = Some(name.into());
        contact
    }

    /// Replaces name, groups and subscription of the entry with the values from our roster.
    pub fn apply(&mut self, update: Contact) {
        match self.contacts.get_mut(&update.id) {
            Some(contact) => *contact = update,
            None => {
                self.contacts.insert(update.id.clone(), update);
            }
        }
    }

    /// The contact was removed from our roster. We keep the entry and only drop the
    /// subscription.
    pub fn mark_removed(&mut self, user_id: &UserId) {
        if let Some(contact) = self.contacts.get_mut(user_id) {
            contact.subscription = PresenceSubscription::None;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
