//! REST DTOs for the document backend.
//!
//! DESIGN
//! ======
//! Listing payloads are decoded leniently: a `files` array may carry nulls or
//! non-string values from a misbehaving backend, and those entries are
//! dropped rather than failing the whole listing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Response of the document listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentListing {
    #[serde(default, deserialize_with = "deserialize_string_entries")]
    pub files: Vec<String>,
}

/// One past interaction, as supplied by the history endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub session_id: String,
    pub prompt: String,
}

/// History grouped into the four fixed time buckets.
///
/// Bucket membership and ordering come from the server unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryBuckets {
    #[serde(default)]
    pub today: Vec<HistoryEntry>,
    #[serde(default)]
    pub yesterday: Vec<HistoryEntry>,
    #[serde(default)]
    pub last_week: Vec<HistoryEntry>,
    #[serde(default)]
    pub last_month: Vec<HistoryEntry>,
}

/// Credential pair returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginTokens {
    pub access: String,
    pub refresh: String,
}

/// Body of the logout notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub refresh: Option<String>,
}

/// Body of the login request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn deserialize_string_entries<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}
