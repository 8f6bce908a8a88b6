use super::*;
use crate::state::session::SessionEvent;

const AUTH: SessionState = SessionState::Authenticated;
const UNAUTH: SessionState = SessionState::Unauthenticated;

#[test]
fn authenticated_at_login_redirects_to_workspace() {
    assert_eq!(route_decision(AUTH, Route::Login), RouteDecision::Redirect(Route::Workspace));
}

#[test]
fn unauthenticated_at_workspace_redirects_to_login() {
    assert_eq!(route_decision(UNAUTH, Route::Workspace), RouteDecision::Redirect(Route::Login));
}

#[test]
fn matching_routes_render() {
    assert_eq!(route_decision(UNAUTH, Route::Login), RouteDecision::Render);
    assert_eq!(route_decision(AUTH, Route::Workspace), RouteDecision::Render);
}

#[test]
fn root_always_redirects_to_login() {
    assert_eq!(route_decision(AUTH, Route::Root), RouteDecision::Redirect(Route::Login));
    assert_eq!(route_decision(UNAUTH, Route::Root), RouteDecision::Redirect(Route::Login));
}

#[test]
fn route_paths_are_absolute() {
    assert_eq!(Route::Root.path(), "/");
    assert_eq!(Route::Login.path(), "/login");
    assert_eq!(Route::Workspace.path(), "/workspace");
}

#[test]
fn should_render_waits_for_resolution() {
    let gate = SessionGate::default();
    assert!(!should_render(&gate, Route::Login));
    assert!(!should_render(&gate, Route::Workspace));
}

#[test]
fn should_render_follows_policy_once_resolved() {
    let mut gate = SessionGate::default();
    gate.apply(SessionEvent::LogoutComplete);
    assert!(should_render(&gate, Route::Login));
    assert!(!should_render(&gate, Route::Workspace));
    gate.apply(SessionEvent::LoginSuccess);
    assert!(should_render(&gate, Route::Workspace));
    assert!(!should_render(&gate, Route::Login));
}
