//! Circular scheduling (C-SCAN and C-LOOK)
//!
//! The head only services requests while moving toward higher cylinders. After the
//! upper part of the queue is done it returns to the low end and sweeps upward
//! again through the lower part.
//!
//! C-SCAN runs out to the last cylinder, then jumps to cylinder 0; the jump is
//! charged as a full traversal (its cost equals the cylinder it starts from).
//! C-LOOK jumps straight from the highest request to the lowest pending one and is
//! charged the true distance between them.

use super::sweep::split_at_head;
use super::walk::Walk;
use super::{Algorithm, SeekPolicy};

/// C-SCAN policy
#[derive(Debug, Clone, Copy)]
pub struct CScan {
    /// Number of cylinders; the far edge is `disk_size - 1`
    pub disk_size: u64,
}

/// C-LOOK policy
#[derive(Debug, Clone, Copy, Default)]
pub struct CLook;

impl SeekPolicy for CScan {
    fn algorithm(&self) -> Algorithm {
        Algorithm::CScan
    }

    fn plan(&self, requests: &[u64], head: u64, walk: &mut Walk) {
        if requests.is_empty() {
            return;
        }
        let (sorted, split) = split_at_head(requests, head);
        let (lower, upper) = sorted.split_at(split);

        walk.visit_all(upper.iter().copied());
        walk.visit_edge(self.disk_size.saturating_sub(1));
        // Wrap to the near edge
        walk.visit(0);
        walk.visit_all(lower.iter().copied());
    }
}

impl SeekPolicy for CLook {
    fn algorithm(&self) -> Algorithm {
        Algorithm::CLook
    }

    fn plan(&self, requests: &[u64], head: u64, walk: &mut Walk) {
        let (sorted, split) = split_at_head(requests, head);
        let (lower, upper) = sorted.split_at(split);

        walk.visit_all(upper.iter().copied());
        // The first lower visit is the wrap jump
        walk.visit_all(lower.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use crate::sched::{clook, cscan};

    const REQUESTS: [u64; 7] = [82, 170, 43, 140, 24, 16, 190];

    #[test]
    fn test_cscan_reference_scenario() {
        let result = cscan(&REQUESTS, 50, 200);
        assert_eq!(result.seek_sequence, vec![82, 140, 170, 190, 199, 0, 16, 24, 43]);
        assert_eq!(result.total_seek_time, (199 - 50) + 199 + 43);
    }

    #[test]
    fn test_cscan_wrap_costs_full_traversal() {
        let result = cscan(&[120, 30], 100, 150);
        let walk = result.walk();
        let wrap = walk.iter().position(|&p| p == 0).unwrap();
        assert_eq!(walk[wrap - 1], 149);
        assert_eq!(walk[wrap - 1].abs_diff(walk[wrap]), 149);
        assert_eq!(result.total_seek_time, 49 + 149 + 30);
    }

    #[test]
    fn test_cscan_lower_part_ascending() {
        let result = cscan(&[5, 60, 30, 10], 40, 100);
        assert_eq!(result.seek_sequence, vec![60, 99, 0, 5, 10, 30]);
    }

    #[test]
    fn test_cscan_request_at_zero_not_repeated() {
        let result = cscan(&[0, 150], 100, 200);
        assert_eq!(result.seek_sequence, vec![150, 199, 0]);
        assert_eq!(result.total_seek_time, 99 + 199);
    }

    #[test]
    fn test_cscan_empty_queue_does_not_move() {
        let result = cscan(&[], 50, 200);
        assert!(result.seek_sequence.is_empty());
        assert_eq!(result.total_seek_time, 0);
    }

    #[test]
    fn test_clook_reference_scenario() {
        let result = clook(&REQUESTS, 50);
        assert_eq!(result.seek_sequence, vec![82, 140, 170, 190, 16, 24, 43]);
        assert_eq!(result.total_seek_time, (190 - 50) + (190 - 16) + (43 - 16));
    }

    #[test]
    fn test_clook_jump_uses_true_distance() {
        let result = clook(&[120, 30, 35], 100);
        assert_eq!(result.seek_sequence, vec![120, 30, 35]);
        assert_eq!(result.total_seek_time, 20 + 90 + 5);
    }

    #[test]
    fn test_clook_never_visits_unrequested_edge() {
        let result = clook(&REQUESTS, 50);
        assert!(!result.seek_sequence.contains(&0));
        assert!(!result.seek_sequence.contains(&199));
    }

    #[test]
    fn test_clook_all_below_head() {
        let result = clook(&[10, 5, 20], 50);
        assert_eq!(result.seek_sequence, vec![5, 10, 20]);
        assert_eq!(result.total_seek_time, 45 + 15);
    }
}
