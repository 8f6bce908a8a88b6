use super::*;

fn paths(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================
// RequestSeq
// =============================================================

#[test]
fn request_seq_only_latest_is_current() {
    let mut seq = RequestSeq::default();
    let first = seq.issue();
    let second = seq.issue();
    assert!(second > first);
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));
}

#[test]
fn request_seq_zero_never_current() {
    assert!(!RequestSeq::default().is_current(0));
}

// =============================================================
// DocumentsState
// =============================================================

#[test]
fn apply_listing_builds_both_pickers() {
    let mut docs = DocumentsState::default();
    let ticket = docs.begin_fetch();
    assert!(docs.loading);
    assert!(docs.apply_listing(ticket, &paths(&["hr/policy.pdf", "hr/leave.pdf", "readme.md"])));
    assert!(!docs.loading);
    assert_eq!(docs.flat.len(), 3);
    assert_eq!(docs.flat[0].label, "policy.pdf");
    assert_eq!(docs.tree.len(), 2);
    assert_eq!(docs.tree[0].children.len(), 2);
}

#[test]
fn slow_stale_response_is_discarded() {
    let mut docs = DocumentsState::default();
    let slow = docs.begin_fetch();
    let fast = docs.begin_fetch();
    assert!(docs.apply_listing(fast, &paths(&["new.pdf"])));
    assert!(!docs.apply_listing(slow, &paths(&["old.pdf"])));
    assert_eq!(docs.flat[0].value, "new.pdf");
    assert_eq!(docs.tree[0].value, "new.pdf");
}

#[test]
fn new_listing_replaces_rather_than_merges() {
    let mut docs = DocumentsState::default();
    let t1 = docs.begin_fetch();
    docs.apply_listing(t1, &paths(&["a/1", "a/2"]));
    let t2 = docs.begin_fetch();
    docs.apply_listing(t2, &paths(&["b/3"]));
    assert_eq!(docs.flat.len(), 1);
    assert_eq!(docs.tree.len(), 1);
    assert_eq!(docs.tree[0].value, "b");
}

#[test]
fn failure_keeps_previous_options() {
    let mut docs = DocumentsState::default();
    let t1 = docs.begin_fetch();
    docs.apply_listing(t1, &paths(&["keep.pdf"]));
    let t2 = docs.begin_fetch();
    assert!(docs.apply_failure(t2, &ApiError::Transport("offline".to_owned())));
    assert!(!docs.loading);
    assert_eq!(docs.flat[0].value, "keep.pdf");
    assert_eq!(docs.error.as_deref(), Some("request failed: offline"));
}

#[test]
fn stale_failure_does_not_touch_state() {
    let mut docs = DocumentsState::default();
    let stale = docs.begin_fetch();
    let current = docs.begin_fetch();
    assert!(!docs.apply_failure(stale, &ApiError::Unavailable));
    assert!(docs.loading);
    assert!(docs.error.is_none());
    assert!(docs.apply_listing(current, &[]));
}

#[test]
fn success_clears_previous_error() {
    let mut docs = DocumentsState::default();
    let t1 = docs.begin_fetch();
    docs.apply_failure(t1, &ApiError::Unavailable);
    let t2 = docs.begin_fetch();
    docs.apply_listing(t2, &paths(&["x"]));
    assert!(docs.error.is_none());
}
