// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::info;

use crate::domain::contacts::models::Contact;
use crate::domain::contacts::ContactDirectory;
use crate::domain::session::IdentityAnonymizer;
use crate::domain::user_info::PresenceStore;

/// Returns the contacts with a mutual subscription and at least one available session,
/// in directory order.
pub fn online_contacts(
    contacts: &ContactDirectory,
    presences: &PresenceStore,
    anonymizer: &mut IdentityAnonymizer,
) -> Vec<Contact> {
    let online = contacts
        .iter()
        .filter(|contact| contact.subscription.is_mutual() && presences.is_present(&contact.id))
        .cloned()
        .collect::<Vec<_>>();

    let pseudonyms = online
        .iter()
        .map(|contact| anonymizer.pseudonym(&contact.id))
        .collect::<Vec<_>>();
    info!("{} online contacts: {:?}", online.len(), pseudonyms);

    online
}
