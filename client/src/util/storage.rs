//! Browser `sessionStorage` access for session credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage is the serialization target of the session gate, not its source of
//! truth. It is read once when the workspace mounts, written by the login
//! flow, and wiped on logout. Everything goes through [`SessionStore`] so the
//! gate can be exercised without a browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Key holding the bearer credential.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Key holding the refresh credential sent on logout.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Key holding the signed-in user's name.
pub const USER_NAME_KEY: &str = "userName";

/// Every key this shell writes.
pub const SESSION_KEYS: [&str; 3] = [AUTH_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_NAME_KEY];

/// String key/value storage scoped to the browser session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    /// Returns `false` when the backing store refused the removal.
    fn remove(&self, key: &str) -> bool;
    /// Drop every entry, including keys this shell never wrote. Returns
    /// `false` when the backing store refused.
    fn clear(&self) -> bool;
}

/// Remove all session data: the named keys first, then anything else.
///
/// Every step is attempted even after a failure. Returns `false` if any
/// step failed, in which case a credential may have survived.
pub fn clear_session<S: SessionStore + ?Sized>(store: &S) -> bool {
    let mut cleared = true;
    for key in SESSION_KEYS {
        cleared &= store.remove(key);
    }
    cleared &= store.clear();
    if !cleared {
        log::warn!("session storage was not fully cleared");
    }
    cleared
}

/// `window.sessionStorage`. Reads return `None` outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = session_storage() else {
                log::warn!("sessionStorage unavailable; dropping {key}");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("sessionStorage rejected write to {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = session_storage() else {
                log::warn!("sessionStorage unavailable; cannot remove {key}");
                return false;
            };
            if storage.remove_item(key).is_err() {
                log::warn!("sessionStorage rejected removal of {key}");
                return false;
            }
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            true
        }
    }

    fn clear(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = session_storage() else {
                log::warn!("sessionStorage unavailable; cannot clear session");
                return false;
            };
            if storage.clear().is_err() {
                log::warn!("sessionStorage rejected clear; credentials may persist");
                return false;
            }
            true
        }
        #[cfg(not(feature = "hydrate"))]
        {
            true
        }
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    items: std::cell::RefCell<std::collections::BTreeMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (k, v) in entries {
            store.set(k, v);
        }
        store
    }

    pub(crate) fn len(&self) -> usize {
        self.items.borrow().len()
    }
}

#[cfg(test)]
impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) -> bool {
        self.items.borrow_mut().remove(key);
        true
    }

    fn clear(&self) -> bool {
        self.items.borrow_mut().clear();
        true
    }
}
