//! Path hierarchy models and picker projections for the document workspace.
//!
//! This crate is UI-framework agnostic so the client crate can consume it
//! directly for both the nested folder picker and the flat multi-select.
//!
//! DESIGN
//! ======
//! A [`PathTree`] is always rebuilt from the full listing; nothing mutates a
//! built tree. Siblings keep first-encountered order so pickers render the
//! same arrangement the server reported.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Path separator used by the document listing.
pub const SEPARATOR: char = '/';

/// Split a path into its non-empty segments.
///
/// Leading, trailing, and repeated separators never produce segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// One path segment and the distinct segments observed beneath it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
    index: HashMap<String, usize>,
}

impl TreeNode {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    /// Segment name of this node. Empty for the synthetic root.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child nodes in first-encountered order.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Look up a direct child by segment name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.index.get(name).map(|&i| &self.children[i])
    }

    /// A leaf is a node no input path continues below.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, excluding `self`.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children.iter().map(|c| 1 + c.descendant_count()).sum()
    }

    fn child_or_insert(&mut self, name: &str) -> &mut TreeNode {
        let pos = match self.index.get(name) {
            Some(&pos) => pos,
            None => {
                let pos = self.children.len();
                self.children.push(TreeNode::named(name));
                self.index.insert(name.to_owned(), pos);
                pos
            }
        };
        &mut self.children[pos]
    }

    fn to_option(&self) -> SelectableOption {
        SelectableOption {
            value: self.name.clone(),
            label: self.name.clone(),
            children: self.children.iter().map(TreeNode::to_option).collect(),
        }
    }
}

/// Deduplicated hierarchy built from a flat set of paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathTree {
    root: TreeNode,
}

impl PathTree {
    /// Build a tree by merging every path's segments into a shared root.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::default();
        for path in paths {
            tree.insert(path.as_ref());
        }
        tree
    }

    fn insert(&mut self, path: &str) {
        let mut current = &mut self.root;
        for segment in segments(path) {
            current = current.child_or_insert(segment);
        }
    }

    /// Top-level nodes in first-encountered order.
    #[must_use]
    pub fn roots(&self) -> &[TreeNode] {
        self.root.children()
    }

    /// Resolve a node by its segment sequence.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        let mut current = &self.root;
        let mut matched = false;
        for segment in segments(path) {
            current = current.child(segment)?;
            matched = true;
        }
        matched.then_some(current)
    }

    /// Total number of distinct segment prefixes across all inserted paths.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Depth-first projection into picker options.
    #[must_use]
    pub fn to_options(&self) -> Vec<SelectableOption> {
        self.root.children.iter().map(TreeNode::to_option).collect()
    }
}

/// Nested option consumed by hierarchical pickers.
///
/// `children` is always present; leaves carry an empty list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub children: Vec<SelectableOption>,
}

impl SelectableOption {
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Entry in the flat multi-select universe.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlatOption {
    /// Full document path.
    pub value: String,
    /// Final path segment, shown to the user.
    pub label: String,
}

impl FlatOption {
    /// Label is everything after the last separator, or the whole path.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let label = path.rsplit(SEPARATOR).next().unwrap_or(path);
        Self {
            value: path.to_owned(),
            label: label.to_owned(),
        }
    }
}

/// Convert flat paths into nested picker options.
pub fn build_tree<I, S>(paths: I) -> Vec<SelectableOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PathTree::from_paths(paths).to_options()
}

/// Convert flat paths into flat picker options.
///
/// Paths with no segments are skipped and repeated paths keep their first
/// position, so every option value is unique.
pub fn flat_options<I, S>(paths: I) -> Vec<FlatOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    paths
        .into_iter()
        .filter(|p| segments(p.as_ref()).next().is_some())
        .filter(|p| seen.insert(p.as_ref().to_owned()))
        .map(|p| FlatOption::from_path(p.as_ref()))
        .collect()
}

/// Absolute path for a cascading pick of segment values.
///
/// Returns `None` for an empty pick.
#[must_use]
pub fn picked_path(values: &[String]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(format!("{SEPARATOR}{}", values.join("/")))
}

/// Option lists for each level of a cascading picker.
///
/// Level 0 is `options`; each pick that names a branch opens one more level.
/// Walking stops at the first pick that is missing or names a leaf.
#[must_use]
pub fn cascade_levels<'a>(options: &'a [SelectableOption], picks: &[String]) -> Vec<&'a [SelectableOption]> {
    let mut levels = vec![options];
    let mut current = options;
    for pick in picks {
        let Some(node) = current.iter().find(|o| &o.value == pick) else {
            break;
        };
        if node.is_leaf() {
            break;
        }
        current = &node.children;
        levels.push(current);
    }
    levels
}

/// Set the pick at `level`, dropping deeper picks. An empty `value` clears
/// `level` and everything below it.
#[must_use]
pub fn pick_at(picks: &[String], level: usize, value: &str) -> Vec<String> {
    let mut next: Vec<String> = picks.iter().take(level).cloned().collect();
    if !value.is_empty() {
        next.push(value.to_owned());
    }
    next
}
