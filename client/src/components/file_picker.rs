//! Flat multi-select over every document path.

use doctree::FlatOption;
use leptos::prelude::*;

use crate::state::documents::DocumentsState;
use crate::state::selection::SelectedFiles;

/// Checkbox list of documents. Each toggle replaces the whole
/// [`SelectedFiles`] snapshot consumed by the main content area.
///
/// Holds no selection of its own: checkboxes read `SelectedFiles` and
/// changes go through `on_toggle`.
#[component]
pub fn FilePicker(on_refresh: Callback<()>, on_toggle: Callback<FlatOption>) -> impl IntoView {
    let documents = expect_context::<RwSignal<DocumentsState>>();
    let selected = expect_context::<RwSignal<SelectedFiles>>();

    view! {
        <div class="file-picker">
            <div class="file-picker__header">
                <span class="file-picker__title">"Documents"</span>
                <button
                    class="btn file-picker__refresh"
                    title="Reload documents"
                    disabled=move || documents.with(|d| d.loading)
                    on:click=move |_| on_refresh.run(())
                >
                    "\u{21BB}"
                </button>
            </div>
            <Show when=move || documents.with(|d| d.error.is_some())>
                <p class="file-picker__error">"Could not refresh documents."</p>
            </Show>
            <Show
                when=move || documents.with(|d| !d.flat.is_empty())
                fallback=move || {
                    view! {
                        <p class="file-picker__empty">
                            {move || if documents.with(|d| d.loading) { "Loading documents..." } else { "No documents." }}
                        </p>
                    }
                }
            >
                <ul class="file-picker__list">
                    <For
                        each=move || documents.with(|d| d.flat.clone())
                        key=|option: &FlatOption| option.value.clone()
                        children=move |option: FlatOption| {
                            view! { <FileOption option=option on_toggle=on_toggle selected=selected/> }
                        }
                    />
                </ul>
            </Show>
            <p class="file-picker__count">
                {move || {
                    let n = selected.with(|s| s.paths().len());
                    if n == 0 { String::new() } else { format!("{n} selected") }
                }}
            </p>
        </div>
    }
}

#[component]
fn FileOption(option: FlatOption, on_toggle: Callback<FlatOption>, selected: RwSignal<SelectedFiles>) -> impl IntoView {
    let value = option.value.clone();
    let checked = move || selected.with(|s| s.contains(&value));
    let title = option.value.clone();
    let label = option.label.clone();

    view! {
        <li class="file-picker__item">
            <label class="file-picker__label" title=title>
                <input
                    type="checkbox"
                    prop:checked=checked
                    on:change=move |_| on_toggle.run(option.clone())
                />
                <span>{label}</span>
            </label>
        </li>
    }
}
