// Radial placement ("constellation" layout).
//
// Every item gets:
// 1. An evenly spaced angular slot from its index in the ordered list
// 2. A small phase jitter from its id hash, so slots shared across filters
//    don't land on the same spot
// 3. A ring radius from its id hash, scattering items over an annulus
//
// Properties:
// - Deterministic (no randomness, no process-seeded hashing)
// - Total: defined for every n >= 0 and every string id

use std::f64::consts::PI;

use super::{LayoutConfig, Placement};

/// Stable id hash: sum of the Unicode scalar values of `id`.
///
/// Equals the UTF-16 code-unit sum for any id inside the Basic Multilingual
/// Plane. Wrapping so arbitrarily long ids stay total.
pub fn id_hash(id: &str) -> u64 {
    id.chars().fold(0u64, |acc, c| acc.wrapping_add(c as u64))
}

/// Angular slot for `index` of `total`, plus the hash-derived phase.
fn slot_angle(hash: u64, index: usize, total: usize, cfg: &LayoutConfig) -> f64 {
    let slot = (2.0 * PI / total.max(1) as f64) * index as f64;
    let phase = (hash % cfg.phase_buckets.max(1)) as f64 * cfg.phase_step;
    slot + phase
}

fn ring_radius(hash: u64, cfg: &LayoutConfig) -> f64 {
    cfg.base_ring + (hash % cfg.ring_spread.max(1)) as f64
}

pub(super) fn place(id: &str, index: usize, total: usize, cfg: &LayoutConfig) -> Placement {
    let hash = id_hash(id);
    let angle = slot_angle(hash, index, total, cfg);
    let ring = ring_radius(hash, cfg);

    Placement {
        id: id.to_string(),
        x: cfg.center.x + angle.cos() * ring,
        y: cfg.center.y + angle.sin() * ring,
        ring,
        angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_hash_ascii() {
        assert_eq!(id_hash(""), 0);
        assert_eq!(id_hash("a"), 97);
        assert_eq!(id_hash("ab"), 97 + 98);
        // Order of characters doesn't matter.
        assert_eq!(id_hash("ab"), id_hash("ba"));
    }

    #[test]
    fn test_id_hash_non_ascii() {
        // 'é' = U+00E9, '星' = U+661F
        assert_eq!(id_hash("é"), 0xE9);
        assert_eq!(id_hash("星a"), 0x661F + 97);
        // Astral chars count as one scalar value.
        assert_eq!(id_hash("🌟"), 0x1F31F);
    }

    #[test]
    fn test_single_slot_uses_phase_only() {
        let cfg = LayoutConfig::default();
        // n = 0 and n = 1 both use a full-circle slot width and never divide by zero.
        assert_eq!(slot_angle(97, 0, 0, &cfg), slot_angle(97, 0, 1, &cfg));
        assert!((slot_angle(97, 0, 1, &cfg) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_slots_evenly_spaced() {
        let cfg = LayoutConfig::default();
        // Same hash => same phase; slots differ by 2π/n.
        let a = slot_angle(13, 0, 4, &cfg);
        let b = slot_angle(13, 1, 4, &cfg);
        assert!((b - a - PI / 2.0).abs() < 1e-12);
        assert_eq!(a, 0.0);
    }

    #[test]
    fn test_phase_jitter_range() {
        let cfg = LayoutConfig::default();
        for hash in 0..200u64 {
            let phase = slot_angle(hash, 0, 1, &cfg);
            assert!((0.0..=0.6 + 1e-12).contains(&phase));
        }
    }

    #[test]
    fn test_ring_radius_range() {
        let cfg = LayoutConfig::default();
        assert_eq!(ring_radius(0, &cfg), 55.0);
        assert_eq!(ring_radius(34, &cfg), 89.0);
        assert_eq!(ring_radius(35, &cfg), 55.0);
    }
}
