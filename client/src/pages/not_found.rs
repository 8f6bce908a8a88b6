use leptos::prelude::*;

use crate::util::auth::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href=Route::Login.path()>"Back to sign in"</a>
        </div>
    }
}
