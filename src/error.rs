//! Input errors
//!
//! Every variant here is raised by request normalization, before any scheduling
//! algorithm runs. The algorithms themselves cannot fail on validated input.

use thiserror::Error;

/// Invalid simulation input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A request token is not an integer
    #[error("Invalid request format: '{token}'. Use comma-separated numbers.")]
    MalformedRequest { token: String },

    /// A request lies outside `[0, max]`
    #[error("Requests must be numbers between 0 and {max} (got {value})")]
    RequestOutOfRange { value: i64, max: u64 },

    /// The head lies outside `[0, max]`
    #[error("Head position must be between 0 and {max} (got {head})")]
    HeadOutOfRange { head: i64, max: u64 },

    /// Disk has no cylinders
    #[error("Disk size must be at least 1")]
    InvalidDiskSize,

    /// The longest possible walk would overflow the seek total
    #[error("{requests} requests on a {disk_size}-cylinder disk could exceed the maximum seek total")]
    SeekTotalOverflow { requests: usize, disk_size: u64 },
}
