//! SeekPulse CLI entry point

use anyhow::{Context, Result};
use seekpulse::config::{cli::Cli, toml, validator, Config, RunMode};
use seekpulse::distribution::generate_workload;
use seekpulse::output::{csv::CsvWriter, json, text};
use seekpulse::sched::SimulationInput;

fn main() -> Result<()> {
    println!("SeekPulse v{}", env!("CARGO_PKG_VERSION"));
    println!("Disk-head scheduling simulator");
    println!();

    let cli = Cli::parse_args();
    cli.validate()?;

    let mut config = build_config(&cli)?;

    validator::validate_config(&config)
        .context("Configuration validation failed")?;

    resolve_random_workload(&mut config, &cli)?;

    print_configuration(&config);

    let input = config
        .to_input()
        .context("Invalid simulation input")?;
    if cli.debug {
        eprintln!(
            "DEBUG: Normalized input: head={}, disk_size={}, {} requests",
            input.head(),
            input.disk_size(),
            input.requests().len()
        );
    }

    if cli.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    println!();

    match config.run.mode {
        RunMode::Simulate => run_simulation(&config, &input, cli.debug),
        RunMode::Compare => run_comparison(&config, &input, cli.debug),
    }
}

/// Load the config file (if any) and apply CLI overrides
fn build_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => {
            if cli.debug {
                eprintln!("DEBUG: Loading config file {}", path.display());
            }
            toml::parse_toml_file(path)?
        }
        None => Config::default(),
    };

    toml::merge_cli_with_config(cli, base)
}

/// Replace requests and head with a generated workload when one is configured
fn resolve_random_workload(config: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(ref random) = config.workload.random {
        let workload = generate_workload(random, config.disk.size)
            .context("Failed to generate random workload")?;
        if cli.debug {
            eprintln!(
                "DEBUG: Generated {} random requests ({}), head {}",
                workload.requests.len(),
                random.distribution,
                workload.head
            );
        }

        config.workload.requests = workload
            .requests
            .iter()
            .map(|&r| i64::try_from(r))
            .collect::<std::result::Result<Vec<i64>, _>>()
            .context("Generated request does not fit the request range")?;
        // An explicit --head keeps its value
        if cli.head.is_none() {
            config.workload.head = i64::try_from(workload.head)
                .context("Generated head does not fit the head range")?;
        }
    }

    Ok(())
}

fn print_configuration(config: &Config) {
    println!("Configuration:");
    println!("  Mode: {}", config.run.mode);
    if config.run.mode == RunMode::Simulate {
        println!("  Algorithm: {}", config.run.algorithm.label());
    }
    println!("  Disk size: {} cylinders", config.disk.size);
    println!("  Head: {}", config.workload.head);
    println!("  Direction: {}", config.workload.direction);
    match config.workload.random {
        Some(ref random) => {
            println!("  Requests: {} (random, {})", config.workload.requests.len(), random.distribution);
            if let Some(seed) = random.seed {
                println!("  Seed: {}", seed);
            }
        }
        None => println!("  Requests: {}", config.workload.requests.len()),
    }

    if let Some(ref path) = config.output.json_output {
        println!("  JSON output: {}", path.display());
    }
    if let Some(ref path) = config.output.csv_output {
        println!("  CSV output: {}", path.display());
    }
}

fn run_simulation(config: &Config, input: &SimulationInput, debug: bool) -> Result<()> {
    let result = input.run(config.run.algorithm);
    if debug {
        eprintln!(
            "DEBUG: {} walked {} points",
            result.algorithm,
            result.chart_points.len()
        );
    }

    text::print_result(&result, input);

    if let Some(ref path) = config.output.json_output {
        let report = json::JsonReport::from_result(input, &result);
        json::write_json_output(path, &report, config.output.json_pretty)?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(ref path) = config.output.csv_output {
        let mut writer = CsvWriter::new_chart(path)?;
        writer.append_result(&result)?;
        writer.finish()?;
        println!("CSV chart points written to {}", path.display());
    }

    Ok(())
}

fn run_comparison(config: &Config, input: &SimulationInput, debug: bool) -> Result<()> {
    let comparison = input.compare();
    if debug {
        if let Some(best) = comparison.best() {
            eprintln!("DEBUG: Lowest total seek: {} ({})", best.name, best.total_seek_time);
        }
    }

    text::print_comparison(&comparison, input);

    if let Some(ref path) = config.output.json_output {
        let report = json::JsonReport::from_comparison(input, &comparison);
        json::write_json_output(path, &report, config.output.json_pretty)?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(ref path) = config.output.csv_output {
        let mut writer = CsvWriter::new_comparison(path)?;
        writer.append_comparison(&comparison)?;
        writer.finish()?;
        println!("CSV comparison written to {}", path.display());
    }

    Ok(())
}
