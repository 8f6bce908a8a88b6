//! Signed-in user badge and logout control.

#[cfg(test)]
#[path = "user_card_test.rs"]
mod user_card_test;

use leptos::prelude::*;

use crate::net::config::ApiConfig;
use crate::state::session::{SessionEvent, SessionGate};
use crate::util::storage::{BrowserSessionStorage, SessionStore, USER_NAME_KEY};

/// Name shown on the card: first letter upper-cased, the rest lower-cased.
/// Missing or blank names show as "Guest".
#[must_use]
pub fn display_user_name(raw: Option<&str>) -> String {
    let name = raw.map(str::trim).unwrap_or_default();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => "Guest".to_owned(),
    }
}

#[component]
pub fn UserCard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionGate>>();
    let config = expect_context::<ApiConfig>();
    let navigate = leptos_router::hooks::use_navigate();

    // Read after mount; the SSR pass always renders the fallback.
    let user_name = RwSignal::new(display_user_name(None));
    Effect::new(move || {
        if session.with(SessionGate::authenticated) {
            user_name.set(display_user_name(BrowserSessionStorage.get(USER_NAME_KEY).as_deref()));
        }
    });

    let on_logout = move |_| {
        let Some(accepted) = session.try_update(|g| g.apply(SessionEvent::LogoutRequested)) else {
            return;
        };
        if !accepted {
            return;
        }
        let (token, refresh) = crate::state::session::logout_credentials(&BrowserSessionStorage);
        let notify = crate::net::api::logout(config.clone(), token, refresh);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let target = crate::state::session::run_logout(&BrowserSessionStorage, notify, |event| {
                session.update(|g| {
                    g.apply(event);
                });
            })
            .await;
            navigate(
                target.path(),
                leptos_router::NavigateOptions {
                    replace: true,
                    ..leptos_router::NavigateOptions::default()
                },
            );
        });
    };

    view! {
        <div class="user-card">
            <span class="user-card__avatar">{move || user_name.get().chars().next().unwrap_or('G').to_string()}</span>
            <span class="user-card__name">{move || user_name.get()}</span>
            <button
                class="btn user-card__logout"
                disabled=move || session.with(SessionGate::logout_pending)
                on:click=on_logout
            >
                {move || if session.with(SessionGate::logout_pending) { "Signing out..." } else { "Log out" }}
            </button>
        </div>
    }
}
