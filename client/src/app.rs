//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::config::{API_URL_META, ApiConfig};
use crate::pages::{login::LoginPage, not_found::NotFoundPage, workspace::WorkspacePage};
use crate::state::session::SessionGate;
use crate::util::auth::Route as AppRoute;
use crate::util::storage::BrowserSessionStorage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_url` is published as a meta tag so the browser build can find the
/// backend without being rebuilt per deployment.
pub fn shell(options: LeptosOptions, api_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META content=api_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session gate and the API configuration; pages read both from
/// context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionGate::default());
    provide_context(session);
    provide_context(ApiConfig::from_environment());

    // Storage is only reachable in the browser, so resolution waits for the
    // first client-side effect run.
    Effect::new(move || {
        if !session.with_untracked(SessionGate::resolved) {
            session.set(SessionGate::resolve(&BrowserSessionStorage));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/docdesk.css"/>
        <Title text="Document Desk"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::Login.path()/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("workspace") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}
