// presence-relay/presence-relay
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use secrecy::{ExposeSecret, Secret};
use sha1::{Digest, Sha1};

use crate::domain::shared::models::UserId;

const HASH_LENGTH: usize = 6;

/// Maps identities to pseudonyms that are safe to log. The local part is kept for
/// readability, the domain is replaced by a salted hash of the full base identity.
pub struct IdentityAnonymizer {
    salt: Secret<String>,
    cache: HashMap<String, String>,
}

impl IdentityAnonymizer {
    pub fn new(salt: Secret<String>) -> Self {
        IdentityAnonymizer {
            salt,
            cache: HashMap::new(),
        }
    }

    pub fn pseudonym(&mut self, user_id: &UserId) -> String {
        self.pseudonym_for_parts(user_id.username(), user_id.domain())
    }

    /// Anonymizes identities which could not be parsed into a `UserId`.
    pub fn pseudonym_for_str(&mut self, identity: &str) -> String {
        let bare = identity
            .split_once('/')
            .map(|(bare, _)| bare)
            .unwrap_or(identity);

        match bare.split_once('@') {
            Some((local, domain)) => self.pseudonym_for_parts(Some(local), domain),
            None => self.pseudonym_for_parts(None, bare),
        }
    }

    fn pseudonym_for_parts(&mut self, local: Option<&str>, domain: &str) -> String {
        let key = match local {
            Some(local) => format!("{}/{}", local, domain),
            None => domain.to_string(),
        };

        if let Some(pseudonym) = self.cache.get(&key) {
            return pseudonym.clone();
        }

        let mut hasher = Sha1::new();
        hasher.update(key.as_bytes());
        hasher.update(self.salt.expose_secret().as_bytes());
        let mut hash = format!("{:x}", hasher.finalize());
        hash.truncate(HASH_LENGTH);

        let pseudonym = match local {
            Some(local) => format!("{}@{}", local, hash),
            None => hash,
        };

        self.cache.insert(key, pseudonym.clone());
        pseudonym
    }

    #[cfg(test)]
    fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
