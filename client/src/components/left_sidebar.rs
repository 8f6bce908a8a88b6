//! Left sidebar: document pickers, history, and the user card.

use doctree::FlatOption;
use leptos::prelude::*;

use super::file_picker::FilePicker;
use super::folder_picker::FolderPicker;
use super::history_list::HistoryList;
use super::user_card::UserCard;

#[component]
pub fn LeftSidebar(on_refresh: Callback<()>, on_toggle: Callback<FlatOption>) -> impl IntoView {
    let collapsed = RwSignal::new(false);

    view! {
        <aside class="left-sidebar" class:left-sidebar--collapsed=move || collapsed.get()>
            <button
                class="btn left-sidebar__toggle"
                title="Toggle sidebar"
                on:click=move |_| collapsed.update(|c| *c = !*c)
            >
                {move || if collapsed.get() { "\u{00BB}" } else { "\u{00AB}" }}
            </button>
            <Show when=move || !collapsed.get()>
                <div class="left-sidebar__body">
                    <FolderPicker/>
                    <FilePicker on_refresh=on_refresh on_toggle=on_toggle/>
                    <HistoryList/>
                </div>
            </Show>
            <UserCard/>
        </aside>
    }
}
