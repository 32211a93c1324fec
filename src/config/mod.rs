//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation. The
//! final workload is normalized by [`crate::sched::normalize`].

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::error::InputError;
use crate::sched::{self, Algorithm, Direction, SimulationInput};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Request queue used when none is given
pub const DEFAULT_REQUESTS: [i64; 7] = [82, 170, 43, 140, 24, 16, 190];

/// Complete simulation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub disk: DiskConfig,
    #[serde(default)]
    pub workload: WorkloadConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Disk geometry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiskConfig {
    /// Number of cylinders (valid addresses are 0..size)
    #[serde(default = "default_disk_size")]
    pub size: u64,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            size: default_disk_size(),
        }
    }
}

fn default_disk_size() -> u64 {
    200
}

/// Request queue and head state
///
/// Values are kept signed until normalization so that negative input reaches the
/// bounds check instead of failing to parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkloadConfig {
    /// Starting head position
    #[serde(default = "default_head")]
    pub head: i64,
    /// Pending cylinder requests in arrival order
    #[serde(default = "default_requests")]
    pub requests: Vec<i64>,
    /// Initial sweep direction (SCAN and LOOK only)
    #[serde(default)]
    pub direction: Direction,
    /// Replace requests and head with a random workload
    pub random: Option<RandomConfig>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            head: default_head(),
            requests: default_requests(),
            direction: Direction::default(),
            random: None,
        }
    }
}

fn default_head() -> i64 {
    50
}

fn default_requests() -> Vec<i64> {
    DEFAULT_REQUESTS.to_vec()
}

/// Random workload generation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RandomConfig {
    /// Number of requests (random between 7 and 13 when unset)
    pub count: Option<usize>,
    /// Seed for reproducible workloads
    pub seed: Option<u64>,
    #[serde(default)]
    pub distribution: DistributionType,
}

/// Distribution of generated cylinder requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DistributionType {
    /// Every cylinder equally likely
    Uniform,
    /// Requests cluster around `center`; both parameters are fractions of the disk
    Gaussian { stddev: f64, center: f64 },
}

impl Default for DistributionType {
    fn default() -> Self {
        Self::Uniform
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DistributionType::Uniform => write!(f, "uniform"),
            DistributionType::Gaussian { stddev, center } => {
                write!(f, "gaussian (stddev={}, center={})", stddev, center)
            }
        }
    }
}

/// What to run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    #[serde(default)]
    pub mode: RunMode,
    /// Algorithm for simulate mode
    #[serde(default)]
    pub algorithm: Algorithm,
}

/// Run mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Run one algorithm
    #[default]
    Simulate,
    /// Run all six and tabulate
    Compare,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunMode::Simulate => write!(f, "simulate"),
            RunMode::Compare => write!(f, "compare"),
        }
    }
}

/// Report files
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// JSON report path
    pub json_output: Option<PathBuf>,
    /// Pretty-print the JSON report
    #[serde(default)]
    pub json_pretty: bool,
    /// CSV path (chart points in simulate mode, table in compare mode)
    pub csv_output: Option<PathBuf>,
}

impl Config {
    /// Normalize the workload into a validated simulation input
    pub fn to_input(&self) -> Result<SimulationInput, InputError> {
        sched::normalize(
            &self.workload.requests,
            self.workload.head,
            self.disk.size,
            self.workload.direction,
        )
    }
}
