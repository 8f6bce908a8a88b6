//! Cascading folder browser over the document hierarchy.

use doctree::{cascade_levels, pick_at, picked_path};
use leptos::prelude::*;

use crate::state::documents::DocumentsState;

/// One `<select>` per hierarchy level; choosing a branch opens the next level.
#[component]
pub fn FolderPicker() -> impl IntoView {
    let documents = expect_context::<RwSignal<DocumentsState>>();
    let picks = RwSignal::new(Vec::<String>::new());

    let on_pick = move |level: usize, value: String| {
        picks.update(|p| *p = pick_at(p, level, &value));
        if let Some(path) = picked_path(&picks.get_untracked()) {
            log::info!("selected folder path: {path}");
        }
    };

    view! {
        <div class="folder-picker">
            <span class="folder-picker__title">"Browse folders"</span>
            {move || {
                let current = picks.get();
                documents.with(|d| {
                    cascade_levels(&d.tree, &current)
                        .into_iter()
                        .enumerate()
                        .map(|(level, options)| {
                            let chosen = current.get(level).cloned().unwrap_or_default();
                            let items = options
                                .iter()
                                .map(|o| {
                                    let is_chosen = o.value == chosen;
                                    let marker = if o.is_leaf() { "" } else { " \u{25B8}" };
                                    view! {
                                        <option value=o.value.clone() selected=is_chosen>
                                            {format!("{}{marker}", o.label)}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <select
                                    class="folder-picker__level"
                                    on:change=move |ev| on_pick(level, event_target_value(&ev))
                                >
                                    <option value="" selected=chosen.is_empty()>
                                        {if level == 0 { "Select a folder" } else { "\u{2014}" }}
                                    </option>
                                    {items}
                                </select>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
            <p class="folder-picker__path">
                {move || picked_path(&picks.get()).unwrap_or_default()}
            </p>
        </div>
    }
}
