// Journal editor state: the entry being written before it's saved.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use super::JournalEntry;

pub const MAX_TAGS: usize = 3;
pub const MAX_CONTENT_CHARS: usize = 1200;

/// Mood / value tags offered by the journal editor.
pub const TAG_OPTIONS: [&str; 6] = ["Calm", "Anxious", "Grateful", "Focused", "Hopeful", "Overwhelmed"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftError {
    pub msg: String,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Draft error: {}", self.msg)
    }
}

impl std::error::Error for DraftError {}

/// Result of toggling a tag on a draft.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TagToggle {
    Added,
    Removed,
    /// Draft already has `MAX_TAGS`; nothing changed.
    LimitReached,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub content: String,
    pub tags: Vec<String>,
}

impl Draft {
    pub fn new(content: impl Into<String>, tags: Vec<String>) -> Self {
        Self { content: content.into(), tags }
    }

    pub fn toggle_tag(&mut self, tag: &str) -> TagToggle {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
            return TagToggle::Removed;
        }
        if self.tags.len() >= MAX_TAGS {
            return TagToggle::LimitReached;
        }
        self.tags.push(tag.to_string());
        TagToggle::Added
    }

    pub fn has_reached_tag_limit(&self) -> bool {
        self.tags.len() >= MAX_TAGS
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    pub fn can_save(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Turn the draft into an entry with the given identity.
    pub fn into_entry(self, id: String, created_at: String) -> Result<JournalEntry, DraftError> {
        if !self.can_save() {
            return Err(DraftError { msg: "Write a few words before saving.".to_string() });
        }
        let content = self.content.trim().to_string();
        if content.chars().count() > MAX_CONTENT_CHARS {
            return Err(DraftError {
                msg: format!("Entries are limited to {} characters.", MAX_CONTENT_CHARS),
            });
        }
        if self.tags.len() > MAX_TAGS {
            return Err(DraftError { msg: format!("Pick up to {} tags.", MAX_TAGS) });
        }
        Ok(JournalEntry { id, content, tags: self.tags, created_at })
    }

    /// Save with a fresh v4 id and the current UTC time.
    pub fn create_entry(self) -> Result<JournalEntry, DraftError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.into_entry(id, created_at)
    }
}
