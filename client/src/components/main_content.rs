//! Main workspace area: the current document selection and active session.

use leptos::prelude::*;

use crate::net::config::ApiConfig;
use crate::net::types::HistoryBuckets;
use crate::state::selection::SelectedFiles;
use crate::util::storage::{AUTH_TOKEN_KEY, BrowserSessionStorage, SessionStore};

/// Placeholder conversation surface.
///
/// Reads the selection and active session, clears the session on "New chat",
/// and acts as the history supplier by loading buckets once on mount.
#[component]
pub fn MainContent(
    selected: Signal<SelectedFiles>,
    active_session: Signal<Option<String>>,
    reset_active_session: Callback<()>,
    set_history: Callback<HistoryBuckets>,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    // Tracks no signals, so this runs once after mount.
    Effect::new(move || {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let token = BrowserSessionStorage.get(AUTH_TOKEN_KEY);
            match crate::net::api::fetch_history(&config, token.as_deref()).await {
                Ok(buckets) => set_history.run(buckets),
                Err(e) => log::warn!("history unavailable: {e}"),
            }
        });
    });

    view! {
        <main class="main-content">
            <header class="main-content__header">
                <h2>
                    {move || match active_session.get() {
                        Some(id) => format!("Session {id}"),
                        None => "New conversation".to_owned(),
                    }}
                </h2>
                <button class="btn main-content__new" on:click=move |_| reset_active_session.run(())>
                    "New chat"
                </button>
            </header>
            <section class="main-content__selection">
                <Show
                    when=move || selected.with(|s| !s.is_empty())
                    fallback=|| view! { <p class="main-content__hint">"Select documents to ask about."</p> }
                >
                    <ul class="main-content__files">
                        {move || {
                            selected
                                .get()
                                .0
                                .into_iter()
                                .map(|path| view! { <li>{path}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </section>
        </main>
    }
}
