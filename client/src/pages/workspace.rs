//! Authenticated workspace: sidebar pickers plus the main content area.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the document listing, the selection, and the history
//! index, and provides each to its components through context. One listing
//! request feeds both the folder picker and the flat picker.
//!
//! The selection registry lives here rather than in the file picker, so
//! collapsing the sidebar never discards what was chosen and a refreshed
//! listing prunes the selection even while the picker is hidden.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use doctree::FlatOption;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::left_sidebar::LeftSidebar;
use crate::components::main_content::MainContent;
use crate::net::config::ApiConfig;
use crate::net::types::HistoryBuckets;
use crate::state::documents::DocumentsState;
use crate::state::history::HistoryIndex;
use crate::state::selection::{SelectedFiles, SelectionRegistry};
use crate::state::session::SessionGate;
use crate::util::auth::{Route, install_route_guard, should_render};
use crate::util::storage::{AUTH_TOKEN_KEY, BrowserSessionStorage, SessionStore};

/// Start a listing request. Only the newest request may land in `documents`.
fn load_documents(config: ApiConfig, documents: RwSignal<DocumentsState>) {
    let ticket = documents.try_update(DocumentsState::begin_fetch).unwrap_or_default();
    leptos::task::spawn_local(async move {
        let token = BrowserSessionStorage.get(AUTH_TOKEN_KEY);
        let result = crate::net::api::fetch_documents(&config, token.as_deref()).await;
        documents.update(|d| match &result {
            Ok(paths) => {
                d.apply_listing(ticket, paths);
            }
            Err(e) => {
                d.apply_failure(ticket, e);
            }
        });
    });
}

/// Entry points into the page-owned selection registry.
#[derive(Clone, Copy)]
pub(crate) struct SelectionHandlers {
    /// Check or uncheck one flat option.
    pub toggle: Callback<FlatOption>,
    /// Drop chosen options missing from a new listing.
    pub retain: Callback<Vec<FlatOption>>,
}

/// Build the one registry that writes `selected`. Every picker mount shares
/// the returned callbacks.
pub(crate) fn selection_handlers(selected: RwSignal<SelectedFiles>) -> SelectionHandlers {
    let registry = StoredValue::new(SelectionRegistry::new(move |files: SelectedFiles| {
        selected.set(files);
    }));
    SelectionHandlers {
        toggle: Callback::new(move |option: FlatOption| {
            registry.update_value(|r| {
                r.toggle(&option);
            });
        }),
        retain: Callback::new(move |available: Vec<FlatOption>| {
            registry.update_value(|r| r.retain_available(&available));
        }),
    }
}

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionGate>>();
    let config = expect_context::<ApiConfig>();
    install_route_guard(session, Route::Workspace, use_navigate());

    let documents = RwSignal::new(DocumentsState::default());
    let selected = RwSignal::new(SelectedFiles::default());
    let history = RwSignal::new(HistoryIndex::default());
    provide_context(documents);
    provide_context(selected);
    provide_context(history);

    let selection = selection_handlers(selected);
    // A refreshed listing may no longer offer something that was chosen.
    Effect::new(move || {
        let available = documents.with(|d| d.flat.clone());
        selection.retain.run(available);
    });

    let requested = RwSignal::new(false);
    let initial_config = config.clone();
    Effect::new(move || {
        if requested.get_untracked() || !session.with(|g| g.resolved() && g.authenticated()) {
            return;
        }
        requested.set(true);
        load_documents(initial_config.clone(), documents);
    });

    let on_refresh = Callback::new(move |()| load_documents(config.clone(), documents));
    let set_history = Callback::new(move |buckets: HistoryBuckets| history.update(|h| h.set_buckets(buckets)));
    let reset_active_session = Callback::new(move |()| {
        history.update(|h| {
            h.reset_active_session();
        });
    });
    let active_session = Signal::derive(move || history.with(|h| h.active_session_id().map(str::to_owned)));
    let selected_files = Signal::from(selected);

    view! {
        <Show when=move || session.with(|g| should_render(g, Route::Workspace))>
            <div class="workspace">
                <LeftSidebar on_refresh=on_refresh on_toggle=selection.toggle/>
                <MainContent
                    selected=selected_files
                    active_session=active_session
                    reset_active_session=reset_active_session
                    set_history=set_history
                />
            </div>
        </Show>
    }
}
