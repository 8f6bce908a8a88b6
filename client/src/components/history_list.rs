//! Sidebar list of past interactions grouped by recency.

#[cfg(test)]
#[path = "history_list_test.rs"]
mod history_list_test;

use leptos::prelude::*;

use crate::net::types::HistoryEntry;
use crate::state::history::HistoryIndex;

#[component]
pub fn HistoryList() -> impl IntoView {
    let history = expect_context::<RwSignal<HistoryIndex>>();

    view! {
        <nav class="history-list">
            {move || {
                history.with(|h| {
                    h.sections()
                        .into_iter()
                        .map(|(bucket, entries)| {
                            let rows = entries
                                .iter()
                                .cloned()
                                .map(|entry| view! { <HistoryRow entry=entry history=history/> })
                                .collect::<Vec<_>>();
                            let empty = rows.is_empty();
                            view! {
                                <section class="history-list__section">
                                    <h4 class="history-list__heading">{bucket.heading()}</h4>
                                    <Show when=move || empty>
                                        <p class="history-list__empty">"Nothing here yet."</p>
                                    </Show>
                                    <ul class="history-list__entries">{rows}</ul>
                                </section>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </nav>
    }
}

#[component]
fn HistoryRow(entry: HistoryEntry, history: RwSignal<HistoryIndex>) -> impl IntoView {
    let session_id = entry.session_id.clone();
    let active_id = entry.session_id.clone();
    let is_active = move || history.with(|h| h.is_active(&active_id));
    let tooltip = entry.prompt.clone();
    let label = entry.prompt;

    view! {
        <li
            class="history-list__entry"
            class:history-list__entry--active=is_active
            title=tooltip
            on:click=move |_| {
                history.update(|h| {
                    h.on_history_click(&session_id);
                });
            }
        >
            {label}
        </li>
    }
}
