//! Constellation view composition.
//!
//! Turns the loaded journal and star flags into the node/edge model drawn
//! by the SVG renderer. Filtering and star lookup happen here, around the
//! layout call; the layout itself only sees the filtered ids.

use crate::journal::{available_tags, entry_title, filter_entries, sanitize_entries, snippet};
use crate::journal::{JournalEntry, TagFilter};
use crate::layout::{layout_constellation, LayoutConfig};
use crate::output::{ConstellationOutput, EdgeOutput, NodeOutput};
use crate::store::{is_starred, StarMap};

#[derive(Debug, Clone)]
pub struct ConstellationConfig {
    /// Only the newest entries are mapped.
    pub max_entries: usize,
    pub layout: LayoutConfig,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            max_entries: 30,
            layout: LayoutConfig::default(),
        }
    }
}

pub fn build_constellation(
    entries: Vec<JournalEntry>,
    stars: &StarMap,
    active_tag: &str,
    cfg: &ConstellationConfig,
) -> ConstellationOutput {
    let mut entries = sanitize_entries(entries);
    entries.truncate(cfg.max_entries);

    let tags = available_tags(&entries);
    let filter = TagFilter::parse(active_tag);
    let visible = filter_entries(&entries, &filter);

    let layout = layout_constellation(&visible, &cfg.layout);

    let nodes: Vec<NodeOutput> = visible
        .iter()
        .zip(layout.placements.iter())
        .map(|(entry, p)| NodeOutput {
            id: entry.id.clone(),
            x: p.x,
            y: p.y,
            starred: is_starred(stars, &entry.id),
            title: entry_title(&entry.content),
            snippet: snippet(&entry.content),
            tags: entry.tags.clone(),
            created_at: entry.created_at.clone(),
        })
        .collect();

    let edges: Vec<EdgeOutput> = layout
        .links
        .iter()
        .map(|link| {
            let from = &layout.placements[link.from];
            let to = &layout.placements[link.to];
            EdgeOutput {
                from: from.id.clone(),
                to: to.id.clone(),
                start: from.point(),
                end: to.point(),
            }
        })
        .collect();

    ConstellationOutput {
        tags,
        active_tag: filter.label().to_string(),
        nodes,
        edges,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::entry;
    use crate::layout::compute_placements;

    fn sample() -> Vec<JournalEntry> {
        vec![
            entry("a", "quiet morning", &["Calm"], "2026-01-01T08:00:00Z"),
            entry("b", "deadline day", &["Anxious"], "2026-01-02T08:00:00Z"),
            entry("c", "long walk after work", &["Calm", "Hopeful"], "2026-01-03T08:00:00Z"),
        ]
    }

    #[test]
    fn test_all_filter_layout_matches_engine() {
        let out = build_constellation(sample(), &StarMap::new(), "All", &ConstellationConfig::default());

        let ids: Vec<&str> = out.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);

        let expected = compute_placements(&["c", "b", "a"]);
        for (node, p) in out.nodes.iter().zip(expected.iter()) {
            assert_eq!(node.x, p.x);
            assert_eq!(node.y, p.y);
        }

        assert_eq!(out.edges.len(), 2);
        assert_eq!(out.edges[0].from, "c");
        assert_eq!(out.edges[0].to, "b");
        assert_eq!(out.edges[1].end, out.nodes[2].point());
        assert_eq!(out.tags, vec!["All", "Calm", "Hopeful", "Anxious"]);
        assert!(out.error.is_none());
    }

    #[test]
    fn test_filter_relayouts_subset() {
        let out = build_constellation(sample(), &StarMap::new(), "Calm", &ConstellationConfig::default());

        let ids: Vec<&str> = out.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
        assert_eq!(out.active_tag, "Calm");

        // Positions are computed within the filtered set (n = 2).
        let expected = compute_placements(&["c", "a"]);
        assert_eq!(out.nodes[1].x, expected[1].x);
        assert_eq!(out.edges.len(), 1);

        // Tags always come from the whole capped journal.
        assert_eq!(out.tags.len(), 4);
    }

    #[test]
    fn test_unknown_tag_is_empty() {
        let out = build_constellation(sample(), &StarMap::new(), "Focused", &ConstellationConfig::default());
        assert!(out.nodes.is_empty());
        assert!(out.edges.is_empty());

        let json = serde_json::to_value(&out).unwrap();
        assert!(json.get("nodes").is_none());
        assert_eq!(json["activeTag"], "Focused");
    }

    #[test]
    fn test_stars_decorate_nodes() {
        let mut stars = StarMap::new();
        stars.insert("b".to_string(), true);
        stars.insert("a".to_string(), false);

        let out = build_constellation(sample(), &stars, "", &ConstellationConfig::default());
        let starred: Vec<(&str, bool)> = out.nodes.iter().map(|n| (n.id.as_str(), n.starred)).collect();
        assert_eq!(starred, vec![("c", false), ("b", true), ("a", false)]);
        assert_eq!(out.active_tag, "All");
    }

    #[test]
    fn test_caps_to_newest() {
        let entries: Vec<JournalEntry> = (0..40)
            .map(|i| entry(&format!("e{i}"), "text", &[], &format!("2026-01-01T00:{:02}:00Z", i)))
            .collect();
        let cfg = ConstellationConfig::default();
        let out = build_constellation(entries, &StarMap::new(), "All", &cfg);

        assert_eq!(out.nodes.len(), 30);
        assert_eq!(out.nodes[0].id, "e39");
        assert_eq!(out.nodes[29].id, "e10");
        assert_eq!(out.edges.len(), 29);
    }

    #[test]
    fn test_node_text_fields() {
        let out = build_constellation(sample(), &StarMap::new(), "All", &ConstellationConfig::default());
        assert_eq!(out.nodes[0].title, "long walk after work");
        assert_eq!(out.nodes[0].snippet, "long walk after work");

        let json = serde_json::to_value(&out.nodes[0]).unwrap();
        assert_eq!(json["createdAt"], "2026-01-03T08:00:00Z");
    }
}
