//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Override run settings
    if let Some(mode) = cli.mode {
        config.run.mode = cli_convert::convert_run_mode(mode);
    }
    if let Some(algorithm) = cli.algorithm {
        config.run.algorithm = cli_convert::convert_algorithm(algorithm);
    }

    // Override disk and workload
    if let Some(size) = cli.disk_size {
        config.disk.size = size;
    }
    if let Some(head) = cli.head {
        config.workload.head = head;
    }
    if let Some(ref requests) = cli.requests {
        config.workload.requests = cli_convert::parse_requests(requests)
            .context("Invalid --requests")?;
        // Explicit requests replace a random workload from the file
        config.workload.random = None;
    }
    if let Some(direction) = cli.direction {
        config.workload.direction = cli_convert::convert_direction(direction);
    }

    // Override random workload
    if cli.random {
        config.workload.random = Some(RandomConfig {
            count: cli.count,
            seed: cli.seed,
            distribution: cli_convert::convert_distribution_type(
                cli.distribution,
                cli.gaussian_stddev,
                cli.gaussian_center,
            ),
        });
    }

    // Override output settings
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.json_pretty {
        config.output.json_pretty = true;
    }
    if let Some(ref path) = cli.csv_output {
        config.output.csv_output = Some(path.clone());
    }

    Ok(config)
}

/// Render configuration as TOML
pub fn to_toml_string(config: &Config) -> Result<String> {
    ::toml::to_string_pretty(config).context("Failed to serialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("seekpulse").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_toml_basic() {
        let toml = r#"
[disk]
size = 500

[workload]
head = 53
requests = [98, 183, 37, 122, 14, 124, 65, 67]
direction = "down"

[run]
mode = "compare"
"#;

        let config = parse_toml_string(toml).unwrap();
        assert_eq!(config.disk.size, 500);
        assert_eq!(config.workload.head, 53);
        assert_eq!(config.workload.requests.len(), 8);
        assert_eq!(config.workload.direction, Direction::Down);
        assert_eq!(config.run.mode, RunMode::Compare);
        assert_eq!(config.run.algorithm, Algorithm::Fcfs);
    }

    #[test]
    fn test_parse_toml_empty_uses_defaults() {
        let config = parse_toml_string("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_toml_algorithm_names() {
        let config = parse_toml_string("[run]\nalgorithm = \"clook\"\n").unwrap();
        assert_eq!(config.run.algorithm, Algorithm::CLook);

        assert!(parse_toml_string("[run]\nalgorithm = \"elevator\"\n").is_err());
    }

    #[test]
    fn test_parse_toml_with_random() {
        let toml = r#"
[workload.random]
count = 10
seed = 42

[workload.random.distribution]
type = "gaussian"
stddev = 0.1
center = 0.3
"#;

        let config = parse_toml_string(toml).unwrap();
        let random = config.workload.random.unwrap();
        assert_eq!(random.count, Some(10));
        assert_eq!(random.seed, Some(42));
        match random.distribution {
            DistributionType::Gaussian { stddev, center } => {
                assert_eq!(stddev, 0.1);
                assert_eq!(center, 0.3);
            }
            _ => panic!("Expected Gaussian distribution"),
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.run.algorithm = Algorithm::Scan;
        config.workload.direction = Direction::Down;

        let text = to_toml_string(&config).unwrap();
        assert_eq!(parse_toml_string(&text).unwrap(), config);
    }

    #[test]
    fn test_parse_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[disk]\nsize = 1000").unwrap();

        let config = parse_toml_file(file.path()).unwrap();
        assert_eq!(config.disk.size, 1000);
    }

    #[test]
    fn test_parse_toml_file_missing() {
        let err = parse_toml_file(Path::new("/nonexistent/seekpulse.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_merge_cli_overrides_file() {
        let config = parse_toml_string("[disk]\nsize = 500\n[workload]\nhead = 10\n").unwrap();
        let merged = merge_cli_with_config(&cli(&["-H", "300", "-a", "look", "-d", "down"]), config)
            .unwrap();

        assert_eq!(merged.disk.size, 500);
        assert_eq!(merged.workload.head, 300);
        assert_eq!(merged.run.algorithm, Algorithm::Look);
        assert_eq!(merged.workload.direction, Direction::Down);
    }

    #[test]
    fn test_merge_keeps_file_when_cli_silent() {
        let config = parse_toml_string("[workload]\nrequests = [1, 2, 3]\n").unwrap();
        let merged = merge_cli_with_config(&cli(&[]), config.clone()).unwrap();
        assert_eq!(merged, config);
    }

    #[test]
    fn test_merge_requests_text() {
        let merged = merge_cli_with_config(&cli(&["-r", "5, 6, 7"]), Config::default()).unwrap();
        assert_eq!(merged.workload.requests, vec![5, 6, 7]);

        assert!(merge_cli_with_config(&cli(&["-r", "5, x"]), Config::default()).is_err());
    }

    #[test]
    fn test_merge_random() {
        let merged = merge_cli_with_config(
            &cli(&["--random", "--count", "9", "--seed", "3"]),
            Config::default(),
        )
        .unwrap();
        let random = merged.workload.random.unwrap();
        assert_eq!(random.count, Some(9));
        assert_eq!(random.seed, Some(3));
        assert_eq!(random.distribution, DistributionType::Uniform);
    }
}
