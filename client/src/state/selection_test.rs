use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn opt(path: &str) -> FlatOption {
    FlatOption::from_path(path)
}

fn recording_registry() -> (SelectionRegistry<impl Fn(SelectedFiles)>, Rc<RefCell<Vec<SelectedFiles>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let registry = SelectionRegistry::new(move |files| sink.borrow_mut().push(files));
    (registry, seen)
}

#[test]
fn project_paths_drops_labels_and_keeps_order() {
    let chosen = vec![opt("b/2.pdf"), opt("a/1.pdf")];
    assert_eq!(project_paths(&chosen), vec!["b/2.pdf", "a/1.pdf"]);
}

#[test]
fn select_replaces_previous_selection() {
    let (mut registry, seen) = recording_registry();
    registry.select(vec![opt("f1"), opt("f2")]);
    let files = registry.select(vec![opt("f3")]);
    assert_eq!(files, vec!["f3"]);
    assert_eq!(seen.borrow().last(), Some(&SelectedFiles(vec!["f3".to_owned()])));
}

#[test]
fn select_notifies_observer_every_change() {
    let (mut registry, seen) = recording_registry();
    registry.select(vec![opt("f1")]);
    registry.select(Vec::new());
    assert_eq!(seen.borrow().len(), 2);
    assert!(seen.borrow()[1].is_empty());
}

#[test]
fn toggle_option_appends_then_removes() {
    let chosen = toggle_option(&[], &opt("a"));
    let chosen = toggle_option(&chosen, &opt("b"));
    assert_eq!(project_paths(&chosen), vec!["a", "b"]);
    let chosen = toggle_option(&chosen, &opt("a"));
    assert_eq!(project_paths(&chosen), vec!["b"]);
}

#[test]
fn toggle_never_duplicates() {
    let (mut registry, _) = recording_registry();
    registry.toggle(&opt("a"));
    registry.toggle(&opt("b"));
    registry.toggle(&opt("a"));
    let files = registry.toggle(&opt("a"));
    assert_eq!(files, vec!["b", "a"]);
}

#[test]
fn retain_available_drops_missing_and_notifies() {
    let (mut registry, seen) = recording_registry();
    registry.select(vec![opt("a"), opt("gone"), opt("c")]);
    registry.retain_available(&[opt("c"), opt("a")]);
    assert_eq!(seen.borrow().last().map(|s| s.paths().to_vec()), Some(vec!["a".to_owned(), "c".to_owned()]));
}

#[test]
fn retain_available_silent_when_nothing_dropped() {
    let (mut registry, seen) = recording_registry();
    registry.select(vec![opt("a")]);
    registry.retain_available(&[opt("a"), opt("b")]);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn selected_files_contains_exact_paths_only() {
    let files = SelectedFiles(vec!["a/b".to_owned(), "c".to_owned()]);
    assert!(files.contains("a/b"));
    assert!(!files.contains("a"));
    assert!(!SelectedFiles::default().contains(""));
}
