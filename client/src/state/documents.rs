//! Document universe shown by the pickers.
//!
//! DESIGN
//! ======
//! One listing feeds both pickers: the flat multi-select options and the
//! nested folder options are rebuilt together from the same paths. Each fetch
//! takes a ticket from [`RequestSeq`]; a response is applied only if its
//! ticket is still the newest, so a slow early response can never overwrite
//! a fast later one.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use doctree::{FlatOption, SelectableOption, build_tree, flat_options};

use crate::net::api::ApiError;

/// Monotonic request ids; only the latest issued id is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Issue the next id. Ids start at 1.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket != 0 && ticket == self.latest
    }
}

/// Picker options derived from the last accepted listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentsState {
    pub flat: Vec<FlatOption>,
    pub tree: Vec<SelectableOption>,
    pub loading: bool,
    pub error: Option<String>,
    seq: RequestSeq,
}

impl DocumentsState {
    /// Start a fetch and return its ticket.
    pub fn begin_fetch(&mut self) -> u64 {
        self.loading = true;
        self.seq.issue()
    }

    /// Replace both option sets with `files` if `ticket` is current.
    ///
    /// Returns `false` when the response was stale and discarded.
    pub fn apply_listing(&mut self, ticket: u64, files: &[String]) -> bool {
        if !self.seq.is_current(ticket) {
            log::debug!("discarding stale document listing #{ticket}");
            return false;
        }
        self.flat = flat_options(files);
        self.tree = build_tree(files);
        self.loading = false;
        self.error = None;
        true
    }

    /// Record a failed fetch; the current options stay visible.
    ///
    /// Returns `false` when the failure belongs to a superseded request.
    pub fn apply_failure(&mut self, ticket: u64, err: &ApiError) -> bool {
        if !self.seq.is_current(ticket) {
            log::debug!("ignoring failure of stale document listing #{ticket}: {err}");
            return false;
        }
        log::warn!("document listing failed: {err}");
        self.loading = false;
        self.error = Some(err.to_string());
        true
    }
}
