// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::Secret;

use crate::domain::contacts::models::Contact;
use crate::domain::contacts::{online_contacts, ContactDirectory};
use crate::domain::session::IdentityAnonymizer;
use crate::domain::shared::models::UserId;
use crate::domain::user_info::PresenceStore;

/// The state owned by a running relay session. It is only ever accessed from the event
/// loop, one event at a time.
pub struct SessionState {
    pub contacts: ContactDirectory,
    pub presences: PresenceStore,
    pub anonymizer: IdentityAnonymizer,
}

impl SessionState {
    pub fn new(salt: Secret<String>) -> Self {
        SessionState {
            contacts: ContactDirectory::new(),
            presences: PresenceStore::new(),
            anonymizer: IdentityAnonymizer::new(salt),
        }
    }

    /// The name from the contact directory, or the pseudonym if no name is set.
    pub fn display_name(&mut self, user_id: &UserId) -> String {
        if let Some(name) = self
            .contacts
            .lookup(user_id)
            .and_then(|contact| contact.display_name())
        {
            return name.to_string();
        }
        self.anonymizer.pseudonym(user_id)
    }

    /// Like `display_name` but accepts a bare or full identity in string form.
    pub fn display_name_of(&mut self, identity: &str) -> String {
        match identity.parse::<jid::Jid>() {
            Ok(jid) => self.display_name(&UserId::from(jid)),
            Err(_) => self.anonymizer.pseudonym_for_str(identity),
        }
    }

    pub fn pseudonym(&mut self, user_id: &UserId) -> String {
        self.anonymizer.pseudonym(user_id)
    }

    pub fn online_contacts(&mut self) -> Vec<Contact> {
        online_contacts(&self.contacts, &self.presences, &mut self.anonymizer)
    }
}
