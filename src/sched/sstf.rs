//! Shortest-Seek-Time-First scheduling
//!
//! Greedy nearest-neighbour: at each step the head moves to the pending request
//! closest to its current position. When two requests are equally close, the one
//! that appears first in the remaining queue wins. Removing a serviced request
//! keeps the others in their original relative order, so ties always resolve
//! toward earlier arrivals.
//!
//! Quadratic in the number of requests, which is fine for simulation-sized queues.

use super::walk::Walk;
use super::{Algorithm, SeekPolicy};

/// SSTF policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl SeekPolicy for Sstf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sstf
    }

    fn plan(&self, requests: &[u64], head: u64, walk: &mut Walk) {
        let mut remaining = requests.to_vec();
        let mut current = head;

        while let Some(index) = nearest(&remaining, current) {
            current = remaining.remove(index);
            walk.visit(current);
        }
    }
}

/// Index of the first entry with minimum distance to `current`
fn nearest(remaining: &[u64], current: u64) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;

    for (index, &cylinder) in remaining.iter().enumerate() {
        let distance = cylinder.abs_diff(current);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}
