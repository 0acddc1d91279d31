//! Output types for the web frontend.
//!
//! These structs are serialized to JSON and handed to the constellation
//! and journal screens for rendering.

use serde::Serialize;

use crate::layout::PointF;

/// A star on the map, ready for the SVG renderer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeOutput {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Whether the user promoted this entry to a star
    pub starred: bool,
    /// Detail sheet heading
    pub title: String,
    pub snippet: String,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl NodeOutput {
    pub fn point(&self) -> PointF {
        PointF { x: self.x, y: self.y }
    }
}

/// A line segment between consecutive nodes
#[derive(Debug, Clone, Serialize)]
pub struct EdgeOutput {
    pub from: String,
    pub to: String,
    pub start: PointF,
    pub end: PointF,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// The combined constellation view model
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstellationOutput {
    /// Filter chips: "All" first, then every tag in first-seen order
    pub tags: Vec<String>,
    pub active_tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl ConstellationOutput {
    pub fn from_error(active_tag: &str, message: impl Into<String>) -> Self {
        Self {
            tags: vec![crate::journal::ALL_TAGS.to_string()],
            active_tag: active_tag.to_string(),
            nodes: vec![],
            edges: vec![],
            error: Some(ErrorInfo::new(message)),
        }
    }
}

/// Result of saving a journal draft
#[derive(Debug, Clone, Serialize)]
pub struct EntryOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<crate::journal::JournalEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Result of toggling a tag chip in the journal editor
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagToggleOutput {
    pub tags: Vec<String>,
    /// "added", "removed" or "limit_reached"
    pub outcome: String,
    pub limit_reached: bool,
    /// Toast text to show, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast: Option<String>,
}
