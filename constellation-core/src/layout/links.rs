// Connecting edges between consecutive placements.
//
// A constellation is drawn as an open path through the ordered list: item i
// connects to item i+1, and the last item does not wrap back to the first.

use serde::Serialize;

/// Edge between two placements, by index into the placement list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub from: usize,
    pub to: usize,
}

/// Exactly `max(n - 1, 0)` links, in draw order.
pub fn connecting_links(n: usize) -> Vec<Link> {
    (1..n).map(|to| Link { from: to - 1, to }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_links_below_two() {
        assert!(connecting_links(0).is_empty());
        assert!(connecting_links(1).is_empty());
    }

    #[test]
    fn test_link_count() {
        for n in 2..10 {
            assert_eq!(connecting_links(n).len(), n - 1);
        }
    }

    #[test]
    fn test_no_wrap_around() {
        let links = connecting_links(3);
        assert_eq!(links, vec![Link { from: 0, to: 1 }, Link { from: 1, to: 2 }]);
        assert!(!links.iter().any(|l| l.from == 2 && l.to == 0));
    }
}
