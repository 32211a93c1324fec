//! Head walk construction
//!
//! A walk is the ordered list of cylinders the head passes through, starting at the
//! head itself. Policies append to it; the engine collapses consecutive repeats
//! (a head parked on a requested cylinder, an edge that is also a request) so no
//! zero-length hop is reported.

/// Ordered head positions, head first
#[derive(Debug, Clone)]
pub struct Walk {
    positions: Vec<u64>,
}

impl Walk {
    /// Start a walk at the head
    pub fn new(head: u64) -> Self {
        Self {
            positions: vec![head],
        }
    }

    /// Starting position
    pub fn head(&self) -> u64 {
        self.positions[0]
    }

    /// Position the head occupies after the last visit
    pub fn current(&self) -> u64 {
        self.positions[self.positions.len() - 1]
    }

    /// Move the head to `position`
    #[inline]
    pub fn visit(&mut self, position: u64) {
        self.positions.push(position);
    }

    /// Visit each position in order
    pub fn visit_all<I: IntoIterator<Item = u64>>(&mut self, positions: I) {
        self.positions.extend(positions);
    }

    /// Sweep to a disk edge unless the head is already there
    pub fn visit_edge(&mut self, edge: u64) {
        if self.current() != edge {
            self.visit(edge);
        }
    }

    /// Raw positions, before collapsing
    pub fn positions(&self) -> &[u64] {
        &self.positions
    }

    /// Collapse consecutive equal positions, keeping the first
    ///
    /// The head is always the first element of the returned list.
    pub fn collapse(self) -> Vec<u64> {
        let mut positions = self.positions;
        positions.dedup();
        positions
    }
}

/// Sum of absolute hops between consecutive positions
///
/// Saturates at `u64::MAX`. Normalized inputs never get there; only direct calls
/// with unchecked cylinders can.
pub fn seek_distance(positions: &[u64]) -> u64 {
    positions
        .windows(2)
        .fold(0u64, |total, w| total.saturating_add(w[0].abs_diff(w[1])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_walk_starts_at_head() {
        let walk = Walk::new(50);
        assert_eq!(walk.head(), 50);
        assert_eq!(walk.current(), 50);
        assert_eq!(walk.positions(), &[50]);
    }

    #[test]
    fn test_collapse_consecutive_repeats() {
        let mut walk = Walk::new(43);
        walk.visit_all([43, 82, 82, 16, 43]);
        assert_eq!(walk.collapse(), vec![43, 82, 16, 43]);
    }

    #[test]
    fn test_visit_edge_skips_when_already_there() {
        let mut walk = Walk::new(10);
        walk.visit(199);
        walk.visit_edge(199);
        assert_eq!(walk.positions(), &[10, 199]);

        walk.visit_edge(0);
        assert_eq!(walk.positions(), &[10, 199, 0]);
    }

    #[test]
    fn test_seek_distance() {
        assert_eq!(seek_distance(&[50, 82, 170, 43, 140, 24, 16, 190]), 642);
        assert_eq!(seek_distance(&[50]), 0);
        assert_eq!(seek_distance(&[]), 0);
    }

    #[test]
    fn test_seek_distance_saturates() {
        assert_eq!(seek_distance(&[0, u64::MAX, 0, u64::MAX]), u64::MAX);
    }

    #[test]
    fn test_collapse_preserves_distance() {
        let mut walk = Walk::new(5);
        walk.visit_all([5, 9, 9, 0, 0, 3]);
        let raw = seek_distance(walk.positions());
        assert_eq!(seek_distance(&walk.collapse()), raw);
    }
}
