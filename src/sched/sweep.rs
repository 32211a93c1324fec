//! Elevator scheduling (SCAN and LOOK)
//!
//! Both algorithms sort the queue and split it at the head: the upper part holds
//! every request at or above the head, the lower part everything below. The head
//! sweeps through one part in the chosen direction, reverses, and sweeps through
//! the other.
//!
//! SCAN continues to the physical edge of the disk before reversing, even when no
//! request lies there. LOOK reverses at the last request in the sweep direction.

use super::walk::Walk;
use super::{Algorithm, Direction, SeekPolicy};

/// SCAN policy
#[derive(Debug, Clone, Copy)]
pub struct Scan {
    pub direction: Direction,
    /// Number of cylinders; the edges are `0` and `disk_size - 1`
    pub disk_size: u64,
}

/// LOOK policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Look {
    pub direction: Direction,
}

impl SeekPolicy for Scan {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Scan
    }

    fn plan(&self, requests: &[u64], head: u64, walk: &mut Walk) {
        // Nothing pending, the head stays put
        if requests.is_empty() {
            return;
        }
        let edge = match self.direction {
            Direction::Up => self.disk_size.saturating_sub(1),
            Direction::Down => 0,
        };
        sweep(requests, head, self.direction, Some(edge), walk);
    }
}

impl SeekPolicy for Look {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Look
    }

    fn plan(&self, requests: &[u64], head: u64, walk: &mut Walk) {
        sweep(requests, head, self.direction, None, walk);
    }
}

/// Sort `requests` and split at the first value `>= head`
///
/// Returns the sorted copy and the split index: `sorted[..split]` lies below the
/// head, `sorted[split..]` at or above it.
pub(crate) fn split_at_head(requests: &[u64], head: u64) -> (Vec<u64>, usize) {
    let mut sorted = requests.to_vec();
    sorted.sort_unstable();
    let split = sorted.partition_point(|&cylinder| cylinder < head);
    (sorted, split)
}

/// Two-leg sweep with an optional edge visit at the turnaround
fn sweep(requests: &[u64], head: u64, direction: Direction, edge: Option<u64>, walk: &mut Walk) {
    let (sorted, split) = split_at_head(requests, head);
    let (lower, upper) = sorted.split_at(split);

    match direction {
        Direction::Up => {
            walk.visit_all(upper.iter().copied());
            if let Some(edge) = edge {
                walk.visit_edge(edge);
            }
            walk.visit_all(lower.iter().rev().copied());
        }
        Direction::Down => {
            walk.visit_all(lower.iter().rev().copied());
            if let Some(edge) = edge {
                walk.visit_edge(edge);
            }
            walk.visit_all(upper.iter().copied());
        }
    }
}
