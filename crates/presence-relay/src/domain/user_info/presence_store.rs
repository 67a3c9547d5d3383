// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use crate::domain::shared::models::{ContactId, UserId};
use crate::domain::user_info::models::Presence;

type ResourceMap = HashMap<Option<String>, Presence>;

/// Tracks which sessions of which contacts are currently available.
///
/// A resource is present in the store iff its session announced availability and has
/// not left since. Base identities without any remaining session are removed, so that
/// `is_present` never sees an empty resource map.
#[derive(Debug, Default)]
pub struct PresenceStore {
    map: HashMap<UserId, ResourceMap>,
}

impl PresenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_available(&mut self, id: &ContactId, presence: Presence) {
        let resource = id.resource().map(ToString::to_string);

        match self.map.get_mut(id.user_id()) {
            Some(resources) => {
                resources.insert(resource, presence);
            }
            None => {
                self.map
                    .insert(id.to_user_id(), HashMap::from([(resource, presence)]));
            }
        }
    }

    /// Returns the removed record or `None` if the session was not known.
    pub fn mark_unavailable(&mut self, id: &ContactId) -> Option<Presence> {
        let resources = self.map.get_mut(id.user_id())?;
        let removed = resources.remove(&id.resource().map(ToString::to_string))?;

        if resources.is_empty() {
            self.map.remove(id.user_id());
        }
        Some(removed)
    }

    pub fn is_present(&self, user_id: &UserId) -> bool {
        self.map
            .get(user_id)
            .map(|resources| !resources.is_empty())
            .unwrap_or(false)
    }

    pub fn get(&self, id: &ContactId) -> Option<&Presence> {
        self.map
            .get(id.user_id())
            .and_then(|resources| resources.get(&id.resource().map(ToString::to_string)))
    }

    /// The number of available sessions of `user_id`.
    pub fn session_count(&self, user_id: &UserId) -> usize {
        self.map.get(user_id).map(HashMap::len).unwrap_or(0)
    }
}
