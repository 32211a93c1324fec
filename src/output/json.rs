//! JSON output formatting
//!
//! Writes a single report file containing:
//! - Run info (tool version, timestamp, mode)
//! - The normalized input
//! - One full result per simulated algorithm (sequence, totals, chart points)
//! - The comparison table (compare mode only)

use crate::config::RunMode;
use crate::sched::{Comparison, ComparisonRow, Direction, SimulationInput, SimulationResult};
use crate::Result;
use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Run metadata
#[derive(Debug, Clone, Serialize)]
pub struct JsonRunInfo {
    pub tool: String,
    pub version: String,
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    pub mode: RunMode,
}

impl JsonRunInfo {
    pub fn new(mode: RunMode) -> Self {
        Self {
            tool: "seekpulse".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            mode,
        }
    }
}

/// Normalized simulation input
#[derive(Debug, Clone, Serialize)]
pub struct JsonInput {
    pub disk_size: u64,
    pub head: u64,
    pub direction: Direction,
    pub requests: Vec<u64>,
}

impl From<&SimulationInput> for JsonInput {
    fn from(input: &SimulationInput) -> Self {
        Self {
            disk_size: input.disk_size(),
            head: input.head(),
            direction: input.direction(),
            requests: input.requests().to_vec(),
        }
    }
}

/// Complete JSON report
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub run_info: JsonRunInfo,
    pub input: JsonInput,
    pub results: Vec<SimulationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Vec<ComparisonRow>>,
}

impl JsonReport {
    /// Report for a single simulation
    pub fn from_result(input: &SimulationInput, result: &SimulationResult) -> Self {
        Self {
            run_info: JsonRunInfo::new(RunMode::Simulate),
            input: JsonInput::from(input),
            results: vec![result.clone()],
            comparison: None,
        }
    }

    /// Report for a six-way comparison
    pub fn from_comparison(input: &SimulationInput, comparison: &Comparison) -> Self {
        Self {
            run_info: JsonRunInfo::new(RunMode::Compare),
            input: JsonInput::from(input),
            results: comparison.results.clone(),
            comparison: Some(comparison.rows.clone()),
        }
    }
}

/// Write JSON report to file
pub fn write_json_output(output_path: &Path, report: &JsonReport, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::Algorithm;

    fn reference_input() -> SimulationInput {
        SimulationInput::new(&[82, 170, 43, 140, 24, 16, 190], 50, 200, Direction::Up).unwrap()
    }

    #[test]
    fn test_single_result_report() {
        let input = reference_input();
        let result = input.run(Algorithm::Fcfs);
        let report = JsonReport::from_result(&input, &result);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["run_info"]["tool"], "seekpulse");
        assert_eq!(value["run_info"]["mode"], "simulate");
        assert_eq!(value["input"]["disk_size"], 200);
        assert_eq!(value["input"]["direction"], "up");
        assert_eq!(value["results"][0]["algorithm"], "fcfs");
        assert_eq!(value["results"][0]["algorithm_name"], "FCFS (First Come First Serve)");
        assert_eq!(value["results"][0]["total_seek_time"], 642);
        assert_eq!(value["results"][0]["chart_points"][0]["label"], "Head");
        assert!(value["results"][0]["chart_points"][0]["index"].is_null());
        assert_eq!(value["results"][0]["chart_points"][1]["label"], "R1");
        assert!(value.get("comparison").is_none());
    }

    #[test]
    fn test_comparison_report() {
        let input = reference_input();
        let report = JsonReport::from_comparison(&input, &input.compare());

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["run_info"]["mode"], "compare");
        assert_eq!(value["results"].as_array().unwrap().len(), 6);
        let rows = value["comparison"].as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[3]["name"], "C-SCAN");
        assert_eq!(rows[3]["algorithm"], "cscan");
    }

    #[test]
    fn test_write_json_output() {
        let input = reference_input();
        let report = JsonReport::from_result(&input, &input.run(Algorithm::Sstf));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_json_output(&path, &report, true).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["results"][0]["seek_sequence"][0], 43);
        assert!(text.contains('\n'));
    }
}
