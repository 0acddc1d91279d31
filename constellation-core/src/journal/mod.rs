//! Journal domain model.
//!
//! Entries are created by the journal screen, persisted as a JSON array
//! (newest first) and read back by the constellation screen.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::layout::LayoutItem;

mod draft;
mod tags;
mod text;

pub use draft::{Draft, DraftError, TagToggle, MAX_CONTENT_CHARS, MAX_TAGS, TAG_OPTIONS};
pub use tags::{available_tags, filter_entries, TagFilter, ALL_TAGS};
pub use text::{entry_title, snippet};

/// A single journal check-in ("Spark" on the constellation map).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// RFC 3339 timestamp, as written by `Date.toISOString()`.
    pub created_at: String,
}

impl JournalEntry {
    /// Entries with a blank id, content or timestamp are never shown.
    pub fn is_displayable(&self) -> bool {
        !self.id.is_empty() && !self.content.is_empty() && !self.created_at.is_empty()
    }

    /// Parse `created_at`. Accepts RFC 3339 and plain `YYYY-MM-DD` dates,
    /// which read as midnight UTC. Other formats yield `None`.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        if let Ok(t) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(t.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.created_at, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|t| t.and_utc())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl LayoutItem for JournalEntry {
    fn layout_id(&self) -> &str {
        &self.id
    }
}

/// Read a JSON array of entries, skipping records that don't deserialize
/// (missing or `null` fields). Only a value that isn't a JSON array at all
/// is an error.
pub fn entries_from_json(raw: &str) -> Result<Vec<JournalEntry>, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    Ok(values
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}

/// Drop entries that can't be displayed and sort newest first.
///
/// Entries whose timestamp doesn't parse are dropped as well. Sorting is
/// stable, so entries sharing a timestamp keep their stored order.
pub fn sanitize_entries(entries: Vec<JournalEntry>) -> Vec<JournalEntry> {
    let mut dated: Vec<(DateTime<Utc>, JournalEntry)> = entries
        .into_iter()
        .filter(JournalEntry::is_displayable)
        .filter_map(|e| e.created_at_utc().map(|t| (t, e)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().map(|(_, e)| e).collect()
}

#[cfg(test)]
pub(crate) fn entry(id: &str, content: &str, tags: &[&str], created_at: &str) -> JournalEntry {
    JournalEntry {
        id: id.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        created_at: created_at.to_string(),
    }
}
