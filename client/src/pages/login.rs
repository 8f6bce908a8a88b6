//! Login page: exchanges a username and password for session tokens.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::config::ApiConfig;
use crate::state::session::{SessionEvent, SessionGate, persist_login};
use crate::util::auth::{Route, install_route_guard, should_render};
use crate::util::storage::BrowserSessionStorage;

/// Trim both fields and require each to be present.
///
/// # Errors
///
/// Returns the message to show when either field is blank.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionGate>>();
    let config = expect_context::<ApiConfig>();
    let navigate = use_navigate();
    install_route_guard(session, Route::Login, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, pass_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&config, &user_value, &pass_value).await {
                Ok(tokens) => {
                    persist_login(&BrowserSessionStorage, &tokens, &user_value);
                    session.update(|g| {
                        g.apply(SessionEvent::LoginSuccess);
                    });
                    log::info!("signed in as {user_value}");
                    navigate(
                        Route::Workspace.path(),
                        NavigateOptions {
                            replace: true,
                            ..NavigateOptions::default()
                        },
                    );
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    info.set(format!("Sign-in failed: {e}"));
                    password.set(String::new());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div
            class="login-page"
            style:display=move || if session.with(|g| should_render(g, Route::Login)) { "" } else { "none" }
        >
            <div class="login-card">
                <h1>"Document Desk"</h1>
                <p class="login-card__subtitle">"Sign in to your workspace"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
