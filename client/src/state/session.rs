//! Session gate deciding whether the workspace or the login surface is shown.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate is an explicit value owned by the app shell and handed to route
//! guards through context. Browser storage is read exactly once, when the
//! shell mounts, and otherwise only written: by the login flow and by
//! [`run_logout`].
//!
//! TRANSITIONS
//! ===========
//! `Unauthenticated --LoginSuccess--> Authenticated`
//! `Authenticated --LogoutRequested--> Authenticated (logout pending)`
//! `* --LogoutComplete--> Unauthenticated`

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;

use crate::net::api::ApiError;
use crate::net::types::LoginTokens;
use crate::util::auth::Route;
use crate::util::storage::{AUTH_TOKEN_KEY, REFRESH_TOKEN_KEY, SessionStore, USER_NAME_KEY, clear_session};

/// Authentication state of the workspace shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    #[must_use]
    pub fn authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

/// Inputs that move the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The login collaborator stored a credential.
    LoginSuccess,
    /// The user asked to leave the workspace.
    LogoutRequested,
    /// Local session data is gone; the user is out.
    LogoutComplete,
}

/// Two-state gate plus the bookkeeping route guards need.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionGate {
    state: SessionState,
    /// False until the mount-time storage read has happened. Guards hold
    /// off redirecting until then.
    resolved: bool,
    logout_pending: bool,
}

impl SessionGate {
    /// Mount-time resolution: a stored credential means authenticated.
    pub fn resolve<S: SessionStore + ?Sized>(store: &S) -> Self {
        let state = if store.get(AUTH_TOKEN_KEY).is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        };
        log::debug!("session resolved at mount: {state:?}");
        Self {
            state,
            resolved: true,
            logout_pending: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.state.authenticated()
    }

    #[must_use]
    pub fn resolved(&self) -> bool {
        self.resolved
    }

    #[must_use]
    pub fn logout_pending(&self) -> bool {
        self.logout_pending
    }

    /// Apply an event. Returns `false` when the event is ignored in the
    /// current state.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::LoginSuccess => {
                self.state = SessionState::Authenticated;
                self.resolved = true;
                self.logout_pending = false;
                true
            }
            SessionEvent::LogoutRequested => {
                if self.logout_pending || !self.authenticated() {
                    return false;
                }
                self.logout_pending = true;
                true
            }
            SessionEvent::LogoutComplete => {
                self.state = SessionState::Unauthenticated;
                self.resolved = true;
                self.logout_pending = false;
                true
            }
        }
    }
}

/// Persist a fresh login so the next mount resolves as authenticated.
pub fn persist_login<S: SessionStore + ?Sized>(store: &S, tokens: &LoginTokens, username: &str) {
    store.set(AUTH_TOKEN_KEY, &tokens.access);
    store.set(REFRESH_TOKEN_KEY, &tokens.refresh);
    store.set(USER_NAME_KEY, username);
}

/// Credentials the logout notification needs, read before storage is wiped.
#[must_use]
pub fn logout_credentials<S: SessionStore + ?Sized>(store: &S) -> (Option<String>, Option<String>) {
    (store.get(AUTH_TOKEN_KEY), store.get(REFRESH_TOKEN_KEY))
}

/// Logout sequence, in order:
///
/// 1. await the best-effort server notification,
/// 2. wipe all session storage,
/// 3. hand [`SessionEvent::LogoutComplete`] to `transition`,
/// 4. return the route to navigate to.
///
/// Steps 2–4 run whether or not step 1 succeeded.
pub async fn run_logout<S, N, T>(store: &S, notify: N, transition: T) -> Route
where
    S: SessionStore + ?Sized,
    N: Future<Output = Result<(), ApiError>>,
    T: FnOnce(SessionEvent),
{
    match notify.await {
        Ok(()) => log::debug!("server session invalidated"),
        Err(e) => log::warn!("logout notification failed, clearing local session anyway: {e}"),
    }
    clear_session(store);
    transition(SessionEvent::LogoutComplete);
    Route::Login
}
