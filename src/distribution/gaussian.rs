//! Gaussian (normal) distribution
//!
//! Requests cluster around a center cylinder, simulating locality of reference.
//!
//! # Parameters
//!
//! - **stddev**: Standard deviation as a fraction of the disk size
//! - **center**: Center point as a fraction of the disk size (0.0-1.0)
//!
//! Samples falling off the platter are clamped to the nearest edge.

use super::Distribution;
use crate::Result;
use anyhow::Context;
use rand::SeedableRng;
use rand_distr::{Distribution as _, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Gaussian distribution for locality of reference
pub struct GaussianDistribution {
    /// Normal over disk fractions
    normal: Normal<f64>,

    rng: Xoshiro256PlusPlus,
}

impl GaussianDistribution {
    /// Create a new Gaussian distribution
    ///
    /// Fails if `stddev` is not positive or `center` lies outside `[0.0, 1.0]`.
    pub fn new(stddev: f64, center: f64) -> Result<Self> {
        Self::with_rng(stddev, center, Xoshiro256PlusPlus::from_entropy())
    }

    /// Create a new Gaussian distribution with specific seed
    pub fn with_seed(stddev: f64, center: f64, seed: u64) -> Result<Self> {
        Self::with_rng(stddev, center, Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn with_rng(stddev: f64, center: f64, rng: Xoshiro256PlusPlus) -> Result<Self> {
        if !(stddev > 0.0) {
            anyhow::bail!("Standard deviation must be positive, got {}", stddev);
        }
        if !(0.0..=1.0).contains(&center) {
            anyhow::bail!("Center must be in range [0.0, 1.0], got {}", center);
        }

        let normal = Normal::new(center, stddev)
            .with_context(|| format!("Invalid gaussian parameters (stddev={}, center={})", stddev, center))?;

        Ok(Self { normal, rng })
    }
}

impl Distribution for GaussianDistribution {
    fn next_cylinder(&mut self, disk_size: u64) -> u64 {
        if disk_size == 0 {
            return 0;
        }

        let max = (disk_size - 1) as f64;
        let fraction = self.normal.sample(&mut self.rng);
        (fraction * max).round().clamp(0.0, max) as u64
    }
}
