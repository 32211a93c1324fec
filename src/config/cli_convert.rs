//! CLI to Config conversion utilities

use crate::config::cli;
use crate::config::{DistributionType, RunMode};
use crate::error::InputError;
use crate::sched::{Algorithm, Direction};

/// Parse a comma-separated request list (e.g., "82, 170, 43") into raw values
///
/// Values stay signed so that negative requests are reported as out of range by
/// normalization rather than as malformed. Blank input yields an empty list.
pub fn parse_requests(s: &str) -> Result<Vec<i64>, InputError> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }

    s.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| InputError::MalformedRequest {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Convert CLI AlgorithmType to Algorithm
pub fn convert_algorithm(cli_type: cli::AlgorithmType) -> Algorithm {
    match cli_type {
        cli::AlgorithmType::Fcfs => Algorithm::Fcfs,
        cli::AlgorithmType::Sstf => Algorithm::Sstf,
        cli::AlgorithmType::Scan => Algorithm::Scan,
        cli::AlgorithmType::CScan => Algorithm::CScan,
        cli::AlgorithmType::Look => Algorithm::Look,
        cli::AlgorithmType::CLook => Algorithm::CLook,
    }
}

/// Convert CLI DirectionType to Direction
pub fn convert_direction(cli_type: cli::DirectionType) -> Direction {
    match cli_type {
        cli::DirectionType::Up => Direction::Up,
        cli::DirectionType::Down => Direction::Down,
    }
}

/// Convert CLI RunMode to config RunMode
pub fn convert_run_mode(cli_mode: cli::RunMode) -> RunMode {
    match cli_mode {
        cli::RunMode::Simulate => RunMode::Simulate,
        cli::RunMode::Compare => RunMode::Compare,
    }
}

/// Convert CLI DistributionType to config DistributionType
pub fn convert_distribution_type(
    cli_type: cli::DistributionType,
    gaussian_stddev: f64,
    gaussian_center: f64,
) -> DistributionType {
    match cli_type {
        cli::DistributionType::Uniform => DistributionType::Uniform,
        cli::DistributionType::Gaussian => DistributionType::Gaussian {
            stddev: gaussian_stddev,
            center: gaussian_center,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requests() {
        assert_eq!(
            parse_requests("82, 170, 43, 140, 24, 16, 190").unwrap(),
            vec![82, 170, 43, 140, 24, 16, 190]
        );
        assert_eq!(parse_requests("5,6").unwrap(), vec![5, 6]);
        assert_eq!(parse_requests("  7  ").unwrap(), vec![7]);
    }

    #[test]
    fn test_parse_requests_keeps_order_and_duplicates() {
        assert_eq!(parse_requests("9, 3, 9").unwrap(), vec![9, 3, 9]);
    }

    #[test]
    fn test_parse_requests_negative() {
        assert_eq!(parse_requests("-4, 10").unwrap(), vec![-4, 10]);
    }

    #[test]
    fn test_parse_requests_blank() {
        assert!(parse_requests("").unwrap().is_empty());
        assert!(parse_requests("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_requests_malformed() {
        assert_eq!(
            parse_requests("10, abc, 20"),
            Err(InputError::MalformedRequest { token: "abc".to_string() })
        );
        assert_eq!(
            parse_requests("10,,20"),
            Err(InputError::MalformedRequest { token: String::new() })
        );
        assert!(parse_requests("10 20").is_err());
        assert!(parse_requests("1.5").is_err());
    }

    #[test]
    fn test_convert_algorithm() {
        assert_eq!(convert_algorithm(cli::AlgorithmType::CScan), Algorithm::CScan);
        assert_eq!(convert_algorithm(cli::AlgorithmType::CLook), Algorithm::CLook);
        assert_eq!(convert_algorithm(cli::AlgorithmType::Sstf), Algorithm::Sstf);
    }

    #[test]
    fn test_convert_distribution() {
        assert_eq!(
            convert_distribution_type(cli::DistributionType::Uniform, 0.15, 0.5),
            DistributionType::Uniform
        );
        assert_eq!(
            convert_distribution_type(cli::DistributionType::Gaussian, 0.2, 0.3),
            DistributionType::Gaussian { stddev: 0.2, center: 0.3 }
        );
    }
}
