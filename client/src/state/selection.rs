//! Multi-select registry for the documents handed to the main content area.
//!
//! DESIGN
//! ======
//! Every picker change replaces the whole selection; there is no diffing and
//! no merge with what was chosen before. The single observer receives the new
//! snapshot each time.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use doctree::FlatOption;

/// Paths chosen in the flat picker, in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedFiles(pub Vec<String>);

impl SelectedFiles {
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.0.iter().any(|p| p == path)
    }
}

/// Project picker options to their paths, dropping labels.
#[must_use]
pub fn project_paths(chosen: &[FlatOption]) -> Vec<String> {
    chosen.iter().map(|o| o.value.clone()).collect()
}

/// Add `option` at the end if absent, otherwise remove it.
///
/// This is the picker-side uniqueness guarantee the registry relies on.
#[must_use]
pub fn toggle_option(chosen: &[FlatOption], option: &FlatOption) -> Vec<FlatOption> {
    if chosen.iter().any(|o| o.value == option.value) {
        chosen.iter().filter(|o| o.value != option.value).cloned().collect()
    } else {
        let mut next = chosen.to_vec();
        next.push(option.clone());
        next
    }
}

/// Holds the current chosen options and notifies one observer on change.
pub struct SelectionRegistry<O> {
    chosen: Vec<FlatOption>,
    observer: O,
}

impl<O> SelectionRegistry<O>
where
    O: Fn(SelectedFiles),
{
    pub fn new(observer: O) -> Self {
        Self {
            chosen: Vec::new(),
            observer,
        }
    }

    /// Replace the selection and push the projected paths to the observer.
    pub fn select(&mut self, chosen: Vec<FlatOption>) -> Vec<String> {
        let files = project_paths(&chosen);
        self.chosen = chosen;
        (self.observer)(SelectedFiles(files.clone()));
        files
    }

    /// Toggle one option, keeping the rest in their selection order.
    pub fn toggle(&mut self, option: &FlatOption) -> Vec<String> {
        let next = toggle_option(&self.chosen, option);
        self.select(next)
    }

    /// Forget options no longer offered after a listing refresh.
    ///
    /// The observer only hears about it when something was actually dropped.
    pub fn retain_available(&mut self, available: &[FlatOption]) {
        let before = self.chosen.len();
        let kept: Vec<FlatOption> = self
            .chosen
            .iter()
            .filter(|o| available.iter().any(|a| a.value == o.value))
            .cloned()
            .collect();
        if kept.len() != before {
            self.select(kept);
        }
    }
}
