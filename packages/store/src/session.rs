//! # Session store: the persisted administrator session
//!
//! [`SessionStore`] is the single source of truth for "is there an
//! authenticated administrator, and who". It keeps two independent entries in
//! a [`KeyValueStore`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | opaque credential token |
//! | [`EMAIL_KEY`] (`"email"`) | identity the token belongs to |
//!
//! Both entries are written together by [`save`](SessionStore::save) and
//! removed together by [`clear`](SessionStore::clear). If only one of them is
//! present (e.g. storage was edited by hand), [`restore`](SessionStore::restore)
//! reports no session and leaves the entries as they are.
//!
//! No network call validates a restored token; an expired token surfaces later
//! as a rejected request.

use crate::models::Credential;

/// Storage key for the credential token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the credential identity.
pub const EMAIL_KEY: &str = "email";

/// Durable string key/value storage.
///
/// Implementations swallow backend errors: a failed read is `None`, a failed
/// write does nothing.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Session persistence on top of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted credential, if both entries are present.
    pub fn restore(&self) -> Option<Credential> {
        let token = self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let email = self.store.get(EMAIL_KEY).filter(|e| !e.is_empty())?;
        Some(Credential { token, email })
    }

    /// Persist a credential issued by a successful login.
    pub fn save(&self, credential: &Credential) {
        self.store.set(TOKEN_KEY, &credential.token);
        self.store.set(EMAIL_KEY, &credential.email);
    }

    /// Erase both persisted entries.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(EMAIL_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.restore().is_some()
    }
}
