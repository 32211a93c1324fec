//! Configuration validation

use super::*;
use anyhow::Result;

/// Largest random workload accepted
pub const MAX_RANDOM_REQUESTS: usize = 10_000;

/// Validate complete configuration
///
/// Checks everything except the request values themselves, which are checked by
/// [`crate::sched::normalize`] once the workload is final (a random workload replaces them).
pub fn validate_config(config: &Config) -> Result<()> {
    validate_disk(&config.disk)?;
    validate_workload(&config.workload)?;
    validate_run(&config.run, &config.workload);

    Ok(())
}

/// Validate disk geometry
pub fn validate_disk(disk: &DiskConfig) -> Result<()> {
    if disk.size == 0 {
        anyhow::bail!(InputError::InvalidDiskSize);
    }

    Ok(())
}

/// Validate workload settings
pub fn validate_workload(workload: &WorkloadConfig) -> Result<()> {
    if let Some(ref random) = workload.random {
        validate_random(random)?;
    }

    Ok(())
}

/// Validate random workload parameters
fn validate_random(random: &RandomConfig) -> Result<()> {
    if let Some(count) = random.count {
        if count == 0 || count > MAX_RANDOM_REQUESTS {
            anyhow::bail!(
                "random request count must be between 1 and {}, got {}",
                MAX_RANDOM_REQUESTS,
                count
            );
        }
    }

    if let DistributionType::Gaussian { stddev, center } = random.distribution {
        if !(stddev > 0.0 && stddev.is_finite()) {
            anyhow::bail!("Gaussian stddev must be positive, got {}", stddev);
        }
        if !(0.0..=1.0).contains(&center) {
            anyhow::bail!("Gaussian center must be between 0.0 and 1.0, got {}", center);
        }
    }

    Ok(())
}

/// Warn about settings that have no effect
fn validate_run(run: &RunConfig, workload: &WorkloadConfig) {
    if run.mode == RunMode::Simulate
        && !run.algorithm.uses_direction()
        && workload.direction != Direction::default()
    {
        eprintln!(
            "Warning: direction '{}' is ignored by {} (only SCAN and LOOK use it)",
            workload.direction, run.algorithm
        );
    }
}
