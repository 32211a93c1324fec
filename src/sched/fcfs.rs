//! First-Come-First-Served scheduling
//!
//! Requests are serviced exactly in arrival order. No sorting, no lookahead.

use super::walk::Walk;
use super::{Algorithm, SeekPolicy};

/// FCFS policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SeekPolicy for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn plan(&self, requests: &[u64], _head: u64, walk: &mut Walk) {
        walk.visit_all(requests.iter().copied());
    }
}
