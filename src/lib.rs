//! SeekPulse - Disk-head scheduling simulator
//!
//! SeekPulse replays a queue of pending cylinder requests against a disk head and
//! reports the service order, the total head movement, and a chart-ready trace.
//!
//! # Architecture
//!
//! - **Seek engine**: FCFS, SSTF, SCAN, C-SCAN, LOOK, C-LOOK behind one policy trait
//! - **Comparison**: all six algorithms over one input, in fixed order
//! - **Request normalization**: parsing and bounds checks before any algorithm runs
//! - **Random workloads**: uniform and gaussian request generators
//! - **Reports**: text, JSON, CSV

pub mod config;
pub mod distribution;
pub mod error;
pub mod output;
pub mod sched;

// Re-export commonly used types
pub use config::Config;
pub use error::InputError;
pub use sched::{Algorithm, Direction, SimulationInput, SimulationResult};

/// Result type used throughout SeekPulse
pub type Result<T> = anyhow::Result<T>;
