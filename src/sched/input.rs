//! Request normalization
//!
//! Raw requests and the head arrive as signed integers (from text, TOML or a
//! caller) and are checked against the disk bounds once, before any algorithm
//! runs. A [`SimulationInput`] can only be built here, so the algorithms never
//! re-check bounds.

use super::{clook, compare, cscan, fcfs, look, scan, sstf};
use super::{Algorithm, Comparison, Direction, SimulationResult};
use crate::error::InputError;

/// Validated simulation input
///
/// Every request and the head are guaranteed to lie in `[0, disk_size)`, and the
/// longest possible walk over them fits in a `u64` seek total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationInput {
    requests: Vec<u64>,
    head: u64,
    disk_size: u64,
    direction: Direction,
}

impl SimulationInput {
    /// Validate raw values and build an input
    ///
    /// See [`normalize`].
    pub fn new(
        requests: &[i64],
        head: i64,
        disk_size: u64,
        direction: Direction,
    ) -> Result<Self, InputError> {
        normalize(requests, head, disk_size, direction)
    }

    pub fn requests(&self) -> &[u64] {
        &self.requests
    }

    pub fn head(&self) -> u64 {
        self.head
    }

    pub fn disk_size(&self) -> u64 {
        self.disk_size
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Run one algorithm against this input
    pub fn run(&self, algorithm: Algorithm) -> SimulationResult {
        let requests = &self.requests;
        match algorithm {
            Algorithm::Fcfs => fcfs(requests, self.head),
            Algorithm::Sstf => sstf(requests, self.head),
            Algorithm::Scan => scan(requests, self.head, self.direction, self.disk_size),
            Algorithm::CScan => cscan(requests, self.head, self.disk_size),
            Algorithm::Look => look(requests, self.head, self.direction),
            Algorithm::CLook => clook(requests, self.head),
        }
    }

    /// Run all six algorithms
    pub fn compare(&self) -> Comparison {
        compare(self)
    }
}

/// Check raw request values and head against the disk bounds
///
/// Every request and the head must satisfy `0 <= v < disk_size`. Requests are
/// checked first, in order; the first violation is reported and nothing is
/// accepted. Finally the workload is rejected if its worst-case seek total
/// (every hop spanning the whole disk) would not fit in a `u64`.
///
/// # Example
///
/// ```
/// use seekpulse::sched::normalize;
/// use seekpulse::{Direction, InputError};
///
/// let input = normalize(&[82, 170, 43], 50, 200, Direction::Up).unwrap();
/// assert_eq!(input.requests(), &[82, 170, 43]);
///
/// let err = normalize(&[82, 200], 50, 200, Direction::Up).unwrap_err();
/// assert_eq!(err, InputError::RequestOutOfRange { value: 200, max: 199 });
/// ```
pub fn normalize(
    raw_requests: &[i64],
    head: i64,
    disk_size: u64,
    direction: Direction,
) -> Result<SimulationInput, InputError> {
    if disk_size == 0 {
        return Err(InputError::InvalidDiskSize);
    }
    let max = disk_size - 1;

    let requests = raw_requests
        .iter()
        .map(|&value| to_cylinder(value, disk_size).ok_or(InputError::RequestOutOfRange { value, max }))
        .collect::<Result<Vec<u64>, InputError>>()?;

    let head = to_cylinder(head, disk_size).ok_or(InputError::HeadOutOfRange { head, max })?;

    if worst_case_seek(requests.len(), max).is_none() {
        return Err(InputError::SeekTotalOverflow {
            requests: requests.len(),
            disk_size,
        });
    }

    Ok(SimulationInput {
        requests,
        head,
        disk_size,
        direction,
    })
}

fn to_cylinder(value: i64, disk_size: u64) -> Option<u64> {
    u64::try_from(value).ok().filter(|&cylinder| cylinder < disk_size)
}

/// Upper bound on any algorithm's seek total
///
/// A walk has at most one hop per request plus two (C-SCAN's far edge and its
/// wrap to 0), and no hop is longer than `max`. An empty queue never moves.
fn worst_case_seek(request_count: usize, max: u64) -> Option<u64> {
    if request_count == 0 {
        return Some(0);
    }
    u64::try_from(request_count)
        .ok()?
        .checked_add(2)?
        .checked_mul(max)
}
