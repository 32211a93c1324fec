//! Disk-head scheduling engine
//!
//! This module defines the scheduling abstraction shared by all six algorithms.
//! A scheduling policy decides the order in which pending cylinder requests are
//! visited; everything else (walk collapsing, seek accumulation, chart points) is
//! handled once by [`simulate`].
//!
//! # Algorithms
//!
//! - **FCFS**: Requests in arrival order
//! - **SSTF**: Nearest pending request first
//! - **SCAN**: Sweep to the disk edge, then reverse
//! - **C-SCAN**: Sweep to the far edge, wrap to cylinder 0, sweep up again
//! - **LOOK**: SCAN that turns around at the last request instead of the edge
//! - **C-LOOK**: C-SCAN that wraps straight to the lowest pending request
//!
//! # Example
//!
//! ```
//! use seekpulse::sched::{fcfs, scan, Direction};
//!
//! let requests = [82, 170, 43, 140, 24, 16, 190];
//!
//! let result = fcfs(&requests, 50);
//! assert_eq!(result.total_seek_time, 642);
//!
//! let result = scan(&requests, 50, Direction::Up, 200);
//! assert_eq!(result.seek_sequence, vec![82, 140, 170, 190, 199, 43, 24, 16]);
//! ```

pub mod chart;
pub mod circular;
pub mod compare;
pub mod fcfs;
pub mod input;
pub mod sstf;
pub mod sweep;
pub mod walk;

use chart::ChartPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use walk::Walk;

pub use circular::{CLook, CScan};
pub use compare::{compare, Comparison, ComparisonRow};
pub use fcfs::Fcfs;
pub use input::{normalize, SimulationInput};
pub use sstf::Sstf;
pub use sweep::{Look, Scan};

/// Scheduling algorithm identity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Fcfs,
    Sstf,
    Scan,
    CScan,
    Look,
    CLook,
}

impl Algorithm {
    /// All algorithms in reporting order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::CScan,
        Algorithm::Look,
        Algorithm::CLook,
    ];

    /// Lowercase identifier, as used in config files and CLI
    pub fn key(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sstf => "sstf",
            Algorithm::Scan => "scan",
            Algorithm::CScan => "cscan",
            Algorithm::Look => "look",
            Algorithm::CLook => "clook",
        }
    }

    /// Full human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS (First Come First Serve)",
            Algorithm::Sstf => "SSTF (Shortest Seek Time First)",
            Algorithm::Scan => "SCAN (Elevator)",
            Algorithm::CScan => "C-SCAN (Circular SCAN)",
            Algorithm::Look => "LOOK",
            Algorithm::CLook => "C-LOOK (Circular LOOK)",
        }
    }

    /// First word of the label, used as the comparison row name
    pub fn short_name(&self) -> &'static str {
        self.label().split(' ').next().unwrap_or_default()
    }

    /// Prefix for chart point labels
    pub fn chart_tag(&self) -> &'static str {
        match self {
            Algorithm::Fcfs | Algorithm::Sstf => "R",
            Algorithm::Scan => "S",
            Algorithm::CScan => "C",
            Algorithm::Look => "L",
            Algorithm::CLook => "CL",
        }
    }

    /// One-sentence summary of the service order
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "Processes requests in the order they arrive, simple but not optimal.",
            Algorithm::Sstf => "Selects the request closest to the current head position.",
            Algorithm::Scan => "Moves in one direction, servicing requests until end, then reverses.",
            Algorithm::CScan => "Moves in one direction, jumps back to beginning when reaching the end.",
            Algorithm::Look => "Like SCAN but only goes as far as the last request in each direction.",
            Algorithm::CLook => "Like C-SCAN but only goes as far as the last request in each direction.",
        }
    }

    /// Whether the initial sweep direction affects this algorithm
    pub fn uses_direction(&self) -> bool {
        matches!(self, Algorithm::Scan | Algorithm::Look)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Initial sweep direction for SCAN and LOOK
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher cylinder numbers
    #[default]
    #[serde(alias = "right")]
    Up,
    /// Toward cylinder 0
    #[serde(alias = "left")]
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Scheduling policy
///
/// A policy appends cylinder positions to a walk that already starts at the head.
/// It must visit every request exactly once; it may also visit positions that are
/// not requests (the disk edges for SCAN and C-SCAN).
///
/// Policies are stateless apart from their parameters, so one instance can be
/// reused for any number of simulations and shared across threads.
pub trait SeekPolicy: Send + Sync {
    /// Algorithm this policy implements
    fn algorithm(&self) -> Algorithm;

    /// Append the service order for `requests` to `walk`
    fn plan(&self, requests: &[u64], head: u64, walk: &mut Walk);
}

/// Run a policy and assemble its result
///
/// Builds the walk, collapses consecutive repeats, and derives the seek totals and
/// chart points from the collapsed walk.
pub fn simulate<P: SeekPolicy + ?Sized>(policy: &P, requests: &[u64], head: u64) -> SimulationResult {
    let mut walk = Walk::new(head);
    policy.plan(requests, head, &mut walk);
    SimulationResult::from_walk(policy.algorithm(), walk, requests.len())
}

/// First-Come-First-Served
pub fn fcfs(requests: &[u64], head: u64) -> SimulationResult {
    simulate(&Fcfs, requests, head)
}

/// Shortest-Seek-Time-First
pub fn sstf(requests: &[u64], head: u64) -> SimulationResult {
    simulate(&Sstf, requests, head)
}

/// SCAN (elevator)
pub fn scan(requests: &[u64], head: u64, direction: Direction, disk_size: u64) -> SimulationResult {
    simulate(&Scan { direction, disk_size }, requests, head)
}

/// Circular SCAN
pub fn cscan(requests: &[u64], head: u64, disk_size: u64) -> SimulationResult {
    simulate(&CScan { disk_size }, requests, head)
}

/// LOOK
pub fn look(requests: &[u64], head: u64, direction: Direction) -> SimulationResult {
    simulate(&Look { direction }, requests, head)
}

/// Circular LOOK
pub fn clook(requests: &[u64], head: u64) -> SimulationResult {
    simulate(&CLook, requests, head)
}

/// Outcome of one simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub algorithm: Algorithm,
    /// Human-readable algorithm name
    pub algorithm_name: String,
    /// Start position of the head
    pub head: u64,
    /// Number of requests submitted (before collapsing)
    pub request_count: usize,
    /// Service order, head excluded
    pub seek_sequence: Vec<u64>,
    /// Total head movement in cylinders
    pub total_seek_time: u64,
    /// Total head movement divided by the submitted request count (0 when empty)
    pub average_seek_time: f64,
    pub chart_points: Vec<ChartPoint>,
}

impl SimulationResult {
    fn from_walk(algorithm: Algorithm, walk: Walk, request_count: usize) -> Self {
        let head = walk.head();
        let positions = walk.collapse();
        let total_seek_time = walk::seek_distance(&positions);
        let average_seek_time = if request_count == 0 {
            0.0
        } else {
            total_seek_time as f64 / request_count as f64
        };
        let chart_points = chart::chart_points(&positions, algorithm);

        Self {
            algorithm,
            algorithm_name: algorithm.label().to_string(),
            head,
            request_count,
            seek_sequence: positions[1..].to_vec(),
            total_seek_time,
            average_seek_time,
            chart_points,
        }
    }

    /// Full walk: head followed by the service order
    pub fn walk(&self) -> Vec<u64> {
        std::iter::once(self.head)
            .chain(self.seek_sequence.iter().copied())
            .collect()
    }

    /// True when the simulation ran on an empty request set
    pub fn is_empty(&self) -> bool {
        self.request_count == 0
    }
}
