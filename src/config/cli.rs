//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use super::validator::MAX_RANDOM_REQUESTS;

/// Run mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    /// Simulate one algorithm (default)
    Simulate,
    /// Run all six algorithms and compare
    Compare,
}

/// SeekPulse - Disk-head scheduling simulator
///
/// Options given on the command line override the configuration file.
#[derive(Parser, Debug)]
#[command(name = "seekpulse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run mode: simulate or compare [default: simulate]
    #[arg(long, value_enum)]
    pub mode: Option<RunMode>,

    /// TOML configuration file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    // === Simulation Options ===
    /// Scheduling algorithm for simulate mode [default: fcfs]
    #[arg(short = 'a', long, value_enum)]
    pub algorithm: Option<AlgorithmType>,

    /// Number of cylinders on the disk [default: 200]
    #[arg(short = 's', long)]
    pub disk_size: Option<u64>,

    /// Starting head position [default: 50]
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub head: Option<i64>,

    /// Comma-separated cylinder requests (e.g., "82, 170, 43, 140")
    #[arg(short = 'r', long, allow_hyphen_values = true)]
    pub requests: Option<String>,

    /// Initial sweep direction for SCAN and LOOK [default: up]
    #[arg(short = 'd', long, value_enum)]
    pub direction: Option<DirectionType>,

    // === Random Workload Options ===
    /// Generate a random request queue and head position
    #[arg(long)]
    pub random: bool,

    /// Number of random requests (default: random between 7 and 13)
    #[arg(long)]
    pub count: Option<usize>,

    /// Seed for reproducible random workloads
    #[arg(long)]
    pub seed: Option<u64>,

    /// Distribution of random requests
    #[arg(long, value_enum, default_value = "uniform")]
    pub distribution: DistributionType,

    /// Gaussian standard deviation (fraction of disk size)
    #[arg(long, default_value = "0.15")]
    pub gaussian_stddev: f64,

    /// Gaussian center point (0.0-1.0, fraction of disk size)
    #[arg(long, default_value = "0.5")]
    pub gaussian_center: f64,

    // === Output Options ===
    /// Write JSON report to file
    #[arg(long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub json_pretty: bool,

    /// Write CSV to file (chart points, or the comparison table in compare mode)
    #[arg(long, value_name = "FILE")]
    pub csv_output: Option<PathBuf>,

    // === Misc Options ===
    /// Validate configuration and exit without simulating
    #[arg(long)]
    pub dry_run: bool,

    /// Print diagnostics to stderr
    #[arg(long)]
    pub debug: bool,
}

/// Scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmType {
    /// First-Come-First-Served
    Fcfs,
    /// Shortest-Seek-Time-First
    Sstf,
    /// SCAN (elevator)
    Scan,
    /// Circular SCAN
    #[value(name = "cscan", alias = "c-scan")]
    CScan,
    /// LOOK
    Look,
    /// Circular LOOK
    #[value(name = "clook", alias = "c-look")]
    CLook,
}

/// Sweep direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionType {
    /// Toward higher cylinders
    #[value(alias = "right")]
    Up,
    /// Toward cylinder 0
    #[value(alias = "left")]
    Down,
}

/// Random request distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionType {
    /// Uniform random (default)
    Uniform,
    /// Gaussian (requests cluster around a center)
    Gaussian,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.disk_size == Some(0) {
            anyhow::bail!("disk_size must be at least 1");
        }

        if self.random && self.requests.is_some() {
            anyhow::bail!("--requests cannot be combined with --random");
        }

        if !self.random && (self.count.is_some() || self.seed.is_some()) {
            anyhow::bail!("--count and --seed require --random");
        }

        if let Some(count) = self.count {
            if count == 0 || count > MAX_RANDOM_REQUESTS {
                anyhow::bail!("count must be between 1 and {}", MAX_RANDOM_REQUESTS);
            }
        }

        if self.distribution == DistributionType::Gaussian {
            if self.gaussian_stddev <= 0.0 {
                anyhow::bail!("gaussian_stddev must be positive");
            }
            if self.gaussian_center < 0.0 || self.gaussian_center > 1.0 {
                anyhow::bail!("gaussian_center must be between 0.0 and 1.0");
            }
        }

        Ok(())
    }
}
