//! Random workload generation
//!
//! This module generates random request queues for experiments. A workload is a
//! list of cylinder requests plus a random starting head position.
//!
//! # Distributions
//!
//! - **Uniform**: Every cylinder equally likely (default)
//! - **Gaussian**: Requests cluster around a center (locality of reference)
//!
//! Generated values always lie in `[0, disk_size)`, so a random workload passes
//! normalization unchanged.
//!
//! # Example
//!
//! ```
//! use seekpulse::config::RandomConfig;
//! use seekpulse::distribution::generate_workload;
//!
//! let config = RandomConfig { count: Some(10), seed: Some(7), ..Default::default() };
//! let workload = generate_workload(&config, 200).unwrap();
//!
//! assert_eq!(workload.requests.len(), 10);
//! assert!(workload.requests.iter().all(|&r| r < 200));
//! assert!(workload.head < 200);
//! ```

pub mod gaussian;
pub mod uniform;

use crate::config::{DistributionType, RandomConfig};
use crate::Result;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Smallest request count picked when none is configured
pub const MIN_DEFAULT_COUNT: usize = 7;
/// Largest request count picked when none is configured
pub const MAX_DEFAULT_COUNT: usize = 13;

/// Distribution trait for cylinder generation
///
/// Each call returns a cylinder in `[0, disk_size)`. Implementations own their
/// PRNG so a seeded instance always produces the same sequence.
pub trait Distribution: Send {
    /// Generate next cylinder within range
    fn next_cylinder(&mut self, disk_size: u64) -> u64;
}

/// Randomly generated requests and head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomWorkload {
    pub requests: Vec<u64>,
    pub head: u64,
}

/// Generate a random workload
///
/// The request count comes from the config or is picked between
/// [`MIN_DEFAULT_COUNT`] and [`MAX_DEFAULT_COUNT`]. The head is always uniform.
pub fn generate_workload(config: &RandomConfig, disk_size: u64) -> Result<RandomWorkload> {
    if disk_size == 0 {
        anyhow::bail!("cannot generate requests for a disk with no cylinders");
    }

    let mut rng = match config.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };

    let mut dist: Box<dyn Distribution> = match config.distribution {
        DistributionType::Uniform => Box::new(uniform::UniformDistribution::with_seed(rng.gen())),
        DistributionType::Gaussian { stddev, center } => Box::new(
            gaussian::GaussianDistribution::with_seed(stddev, center, rng.gen())?,
        ),
    };

    let count = config
        .count
        .unwrap_or_else(|| rng.gen_range(MIN_DEFAULT_COUNT..=MAX_DEFAULT_COUNT));

    let requests = (0..count).map(|_| dist.next_cylinder(disk_size)).collect();
    let head = rng.gen_range(0..disk_size);

    Ok(RandomWorkload { requests, head })
}
