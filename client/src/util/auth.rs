//! Route policy shared by every guarded page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages install [`install_route_guard`] so redirect behavior lives in one
//! pure function, [`route_decision`], instead of per-page effects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionGate, SessionState};

/// Routes the shell knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Workspace,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Workspace => "/workspace",
        }
    }
}

/// What a route should do for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(Route),
}

/// Redirect policy:
/// - root always goes to login,
/// - an authenticated user at login goes to the workspace,
/// - an unauthenticated user at the workspace goes to login,
/// - anything else renders.
#[must_use]
pub fn route_decision(state: SessionState, route: Route) -> RouteDecision {
    match (state, route) {
        (_, Route::Root) => RouteDecision::Redirect(Route::Login),
        (SessionState::Authenticated, Route::Login) => RouteDecision::Redirect(Route::Workspace),
        (SessionState::Unauthenticated, Route::Workspace) => RouteDecision::Redirect(Route::Login),
        _ => RouteDecision::Render,
    }
}

/// Whether `route` should render now. Nothing renders before the gate has
/// resolved, so the login form never flashes for a signed-in user.
#[must_use]
pub fn should_render(gate: &SessionGate, route: Route) -> bool {
    gate.resolved() && route_decision(gate.state(), route) == RouteDecision::Render
}

/// Navigate away from `route` whenever the resolved gate says so.
pub fn install_route_guard<F>(session: RwSignal<SessionGate>, route: Route, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let gate = session.get();
        if !gate.resolved() {
            return;
        }
        if let RouteDecision::Redirect(target) = route_decision(gate.state(), route) {
            log::debug!("redirecting {} -> {}", route.path(), target.path());
            navigate(
                target.path(),
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
