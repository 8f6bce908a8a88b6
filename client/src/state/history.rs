//! Interaction history and the active session id.
//!
//! SYSTEM CONTEXT
//! ==============
//! Buckets arrive pre-grouped from the history supplier and are shown as-is.
//! The sidebar sets the active session on click; only the main content area
//! clears it.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::{HistoryBuckets, HistoryEntry};

/// The four fixed history groupings, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bucket {
    Today,
    Yesterday,
    LastWeek,
    LastMonth,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::Today, Bucket::Yesterday, Bucket::LastWeek, Bucket::LastMonth];

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::LastWeek => "Last Week",
            Self::LastMonth => "Last Month",
        }
    }

    #[must_use]
    pub fn entries(self, buckets: &HistoryBuckets) -> &[HistoryEntry] {
        match self {
            Self::Today => &buckets.today,
            Self::Yesterday => &buckets.yesterday,
            Self::LastWeek => &buckets.last_week,
            Self::LastMonth => &buckets.last_month,
        }
    }
}

/// History buckets plus the one live session id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryIndex {
    buckets: HistoryBuckets,
    active_session_id: Option<String>,
}

impl HistoryIndex {
    /// Swap in a fresh set of buckets from the supplier.
    ///
    /// The active session id is untouched even if it no longer appears.
    pub fn set_buckets(&mut self, buckets: HistoryBuckets) {
        self.buckets = buckets;
    }

    /// Make `session_id` the active session, replacing any previous one.
    ///
    /// No membership check: the id is trusted as supplied by the list.
    pub fn on_history_click(&mut self, session_id: &str) -> Option<&str> {
        self.active_session_id = Some(session_id.to_owned());
        self.active_session_id.as_deref()
    }

    /// Clear the active session.
    pub fn reset_active_session(&mut self) -> Option<&str> {
        self.active_session_id = None;
        None
    }

    #[must_use]
    pub fn active_session_id(&self) -> Option<&str> {
        self.active_session_id.as_deref()
    }

    #[must_use]
    pub fn is_active(&self, session_id: &str) -> bool {
        self.active_session_id.as_deref() == Some(session_id)
    }

    /// All four buckets, in display order, empty ones included.
    #[must_use]
    pub fn sections(&self) -> Vec<(Bucket, &[HistoryEntry])> {
        Bucket::ALL
            .into_iter()
            .map(|b| (b, b.entries(&self.buckets)))
            .collect()
    }
}
