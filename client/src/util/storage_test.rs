use super::*;

#[test]
fn clear_session_removes_named_keys() {
    let store = MemoryStore::with(&[
        (AUTH_TOKEN_KEY, "tok"),
        (REFRESH_TOKEN_KEY, "ref"),
        (USER_NAME_KEY, "alice"),
    ]);
    assert!(clear_session(&store));
    for key in SESSION_KEYS {
        assert_eq!(store.get(key), None, "{key} should be cleared");
    }
}

#[test]
fn clear_session_removes_unknown_keys_too() {
    let store = MemoryStore::with(&[(AUTH_TOKEN_KEY, "tok"), ("theme", "dark")]);
    clear_session(&store);
    assert_eq!(store.len(), 0);
}

/// Store whose blanket `clear` is refused, as a locked-down browser may do.
struct ClearRefused(MemoryStore);

impl SessionStore for ClearRefused {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.0.set(key, value);
    }

    fn remove(&self, key: &str) -> bool {
        self.0.remove(key)
    }

    fn clear(&self) -> bool {
        false
    }
}

#[test]
fn clear_session_reports_refused_clear() {
    let store = ClearRefused(MemoryStore::with(&[(AUTH_TOKEN_KEY, "tok"), ("theme", "dark")]));
    assert!(!clear_session(&store));
    // Named keys are still removed one by one.
    assert_eq!(store.get(AUTH_TOKEN_KEY), None);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn session_keys_match_persisted_layout() {
    assert_eq!(SESSION_KEYS, ["authToken", "refreshToken", "userName"]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_reads_nothing_outside_browser() {
    let store = BrowserSessionStorage;
    store.set(AUTH_TOKEN_KEY, "tok");
    assert_eq!(store.get(AUTH_TOKEN_KEY), None);
}
