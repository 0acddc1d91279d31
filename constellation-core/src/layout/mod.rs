// Constellation layout.
//
// Deterministic radial layouter for journal entries.
//
// Goals:
// - Deterministic: same ordered ids => bit-identical coordinates
// - Pure: reads ids only, never touches entries, stars or storage
// - Organic: ids pick their own ring radius and a small phase jitter
//
// Submodules:
// - radial_placement: id hash + angle/ring math
// - links: consecutive connecting edges
//
// Output:
// - One Placement per input item, in input order, plus n-1 Links.

use serde::Serialize;

mod links;
mod radial_placement;

pub use links::{connecting_links, Link};
pub use radial_placement::id_hash;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub fn distance_to(&self, other: &PointF) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Center of the canvas. Canonical canvas is 300x300.
    pub center: PointF,
    /// Smallest ring radius.
    pub base_ring: f64,
    /// Ring radius is `base_ring + (hash % ring_spread)`.
    pub ring_spread: u64,
    /// Number of distinct phase offsets.
    pub phase_buckets: u64,
    /// Radians per phase bucket.
    pub phase_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center: PointF { x: 150.0, y: 150.0 },
            base_ring: 55.0,
            ring_spread: 35,
            phase_buckets: 13,
            phase_step: 0.05,
        }
    }
}

impl LayoutConfig {
    /// Inclusive radius band every placement falls into.
    pub fn ring_bounds(&self) -> (f64, f64) {
        let spread = self.ring_spread.max(1) - 1;
        (self.base_ring, self.base_ring + spread as f64)
    }
}

/// Anything that can be placed on the map. Only the id matters for layout.
pub trait LayoutItem {
    fn layout_id(&self) -> &str;
}

impl LayoutItem for str {
    fn layout_id(&self) -> &str {
        self
    }
}

impl LayoutItem for String {
    fn layout_id(&self) -> &str {
        self.as_str()
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for &T {
    fn layout_id(&self) -> &str {
        (**self).layout_id()
    }
}

/// Position assigned to one item. Ephemeral, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Distance from the canvas center.
    pub ring: f64,
    /// Angle in radians (not normalized).
    pub angle: f64,
}

impl Placement {
    pub fn point(&self) -> PointF {
        PointF { x: self.x, y: self.y }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutResult {
    pub placements: Vec<Placement>,
    pub links: Vec<Link>,
}

/// Place items on the canonical 300x300 canvas.
pub fn compute_placements<T: LayoutItem>(items: &[T]) -> Vec<Placement> {
    compute_placements_with(items, &LayoutConfig::default())
}

pub fn compute_placements_with<T: LayoutItem>(items: &[T], cfg: &LayoutConfig) -> Vec<Placement> {
    let total = items.len();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| radial_placement::place(item.layout_id(), index, total, cfg))
        .collect()
}

/// Placements plus the edges joining consecutive placements.
pub fn layout_constellation<T: LayoutItem>(items: &[T], cfg: &LayoutConfig) -> LayoutResult {
    let placements = compute_placements_with(items, cfg);
    let links = connecting_links(placements.len());
    LayoutResult { placements, links }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<String> = vec![];
        assert!(compute_placements(&items).is_empty());

        let result = layout_constellation(&items, &LayoutConfig::default());
        assert!(result.placements.is_empty());
        assert!(result.links.is_empty());
    }

    #[test]
    fn test_single_item_worked_example() {
        let placements = compute_placements(&["a"]);
        assert_eq!(placements.len(), 1);

        let p = &placements[0];
        assert_eq!(p.id, "a");
        assert_eq!(p.ring, 82.0);
        assert!((p.angle - 0.3).abs() < 1e-12);
        assert!((p.x - (150.0 + 0.3f64.cos() * 82.0)).abs() < 1e-9);
        assert!((p.y - (150.0 + 0.3f64.sin() * 82.0)).abs() < 1e-9);
        assert!((p.x - 228.34).abs() < 0.01);
        assert!((p.y - 174.23).abs() < 0.01);
    }

    #[test]
    fn test_deterministic() {
        let items = ids(&["3f2a", "entry-7", "b1c9d", "zz"]);
        let first = compute_placements(&items);
        let second = compute_placements(&items);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn test_order_preserved() {
        let items = ids(&["c", "a", "b", "a"]);
        let placements = compute_placements(&items);

        let out: Vec<&str> = placements.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(out, vec!["c", "a", "b", "a"]);
    }

    #[test]
    fn test_radius_within_band() {
        let cfg = LayoutConfig::default();
        let (min_r, max_r) = cfg.ring_bounds();
        assert_eq!((min_r, max_r), (55.0, 89.0));

        let items: Vec<String> = (0..60).map(|i| format!("spark-{i}-{}", i * 31)).collect();
        for p in compute_placements(&items) {
            let r = p.point().distance_to(&cfg.center);
            assert!(r >= min_r - 1e-9 && r <= max_r + 1e-9, "radius {r} out of band for {}", p.id);
        }
    }

    #[test]
    fn test_reorder_changes_positions() {
        let forward = compute_placements(&["a", "b"]);
        let reversed = compute_placements(&["b", "a"]);

        // Same ring per id, different angular slot.
        assert_eq!(forward[0].ring, reversed[1].ring);
        assert_ne!(forward[0].point(), reversed[1].point());
        assert_ne!(forward[1].point(), reversed[0].point());
    }

    #[test]
    fn test_links_follow_output_order() {
        let items = ids(&["a", "b", "c", "d"]);
        let result = layout_constellation(&items, &LayoutConfig::default());

        assert_eq!(result.links.len(), 3);
        for (i, link) in result.links.iter().enumerate() {
            assert_eq!(link.from, i);
            assert_eq!(link.to, i + 1);
        }
    }

    #[test]
    fn test_custom_center() {
        let cfg = LayoutConfig {
            center: PointF { x: 0.0, y: 0.0 },
            ..LayoutConfig::default()
        };
        let p = &compute_placements_with(&["a"], &cfg)[0];
        assert!((p.x - 0.3f64.cos() * 82.0).abs() < 1e-9);
    }
}
