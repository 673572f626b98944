//! # localStorage key/value store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! writes straight into `window.localStorage`, so a session survives page
//! reloads.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). Storage can be unavailable (private browsing,
//! quota, disabled cookies); that degrades to "no session" rather than
//! crashing the page.

use web_sys::Storage;

use crate::session::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
///
/// Zero-size and `Clone`; the `Storage` handle is looked up on every call.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
