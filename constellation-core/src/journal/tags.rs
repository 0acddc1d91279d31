// Tag collection and filtering for the constellation screen.

use std::collections::HashSet;

use super::JournalEntry;

/// Filter label meaning "no filter".
pub const ALL_TAGS: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagFilter {
    All,
    Tag(String),
}

impl TagFilter {
    /// `"All"` and the empty string map to `TagFilter::All`.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() || s == ALL_TAGS {
            TagFilter::All
        } else {
            TagFilter::Tag(s.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TagFilter::All => ALL_TAGS,
            TagFilter::Tag(t) => t,
        }
    }

    pub fn matches(&self, entry: &JournalEntry) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(t) => entry.has_tag(t),
        }
    }
}

/// `"All"` followed by every distinct tag, in first-seen order.
pub fn available_tags(entries: &[JournalEntry]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = vec![ALL_TAGS.to_string()];
    for tag in entries.iter().flat_map(|e| e.tags.iter()) {
        if seen.insert(tag.as_str()) {
            out.push(tag.clone());
        }
    }
    out
}

/// Entries matching `filter`, order preserved.
pub fn filter_entries<'a>(entries: &'a [JournalEntry], filter: &TagFilter) -> Vec<&'a JournalEntry> {
    entries.iter().filter(|e| filter.matches(e)).collect()
}
