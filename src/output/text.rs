//! Human-readable text output

use crate::sched::{Comparison, SimulationInput, SimulationResult};

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// Print one simulation to console
///
/// Displays:
/// - Service order (head first)
/// - Total and average seek time
/// - Step-by-step trace with per-hop distance
pub fn print_result(result: &SimulationResult, input: &SimulationInput) {
    println!("{}", RULE);
    println!("                  SIMULATION RESULTS");
    println!("{}", RULE);
    println!();

    println!("Algorithm: {}", result.algorithm_name);
    println!("  {}", result.algorithm.description());
    println!();

    println!("Disk:");
    println!("  Cylinders: 0 - {}", input.disk_size().saturating_sub(1));
    println!("  Head:      {}", result.head);
    if result.algorithm.uses_direction() {
        println!("  Direction: {}", input.direction());
    }
    println!("  Requests:  {}", result.request_count);
    println!();

    if result.is_empty() {
        println!("No requests to service");
        println!();
    }

    println!("Seek Sequence:");
    println!("  {}", format_sequence(&result.walk()));
    println!();

    println!("Seek Time:");
    println!("  Total:   {} cylinders", format_number(result.total_seek_time));
    println!("  Average: {:.2} cylinders/request", result.average_seek_time);
    println!();

    if result.chart_points.len() > 1 {
        println!("Trace:");
        println!("  {:>6}  {:>8}  {:>8}", "Step", "Position", "Distance");
        let mut previous = result.head;
        for point in &result.chart_points {
            let distance = point.position.abs_diff(previous);
            println!("  {:>6}  {:>8}  {:>8}", point.label, point.position, distance);
            previous = point.position;
        }
        println!();
    }

    println!("{}", RULE);
}

/// Print a comparison of all algorithms
///
/// Rows keep the fixed algorithm order; the lowest total is marked.
pub fn print_comparison(comparison: &Comparison, input: &SimulationInput) {
    println!("{}", RULE);
    println!("                 ALGORITHM COMPARISON");
    println!("{}", RULE);
    println!();

    println!("Head: {}, Disk: {} cylinders, Direction: {} (SCAN/LOOK)",
             input.head(), input.disk_size(), input.direction());
    println!("Requests ({}): {}", input.requests().len(), format_list(input.requests()));
    println!();

    if input.requests().is_empty() {
        println!("No requests to service");
        println!();
    }

    let best = comparison.best().map(|row| row.algorithm);

    println!("  {:<8}  {:>12}  {:>12}", "Name", "Total", "Average");
    for row in &comparison.rows {
        let marker = if Some(row.algorithm) == best { "  <- best" } else { "" };
        println!("  {:<8}  {:>12}  {:>12.2}{}",
                 row.name,
                 format_number(row.total_seek_time),
                 row.average_seek_time,
                 marker);
    }
    println!();

    println!("Seek Sequences:");
    for result in &comparison.results {
        println!("  {:<8}  {}", result.algorithm.short_name(), format_sequence(&result.walk()));
    }
    println!();

    println!("{}", RULE);
}

/// Format a walk as `50 → 82 → 170`
pub fn format_sequence(walk: &[u64]) -> String {
    walk.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

fn format_list(values: &[u64]) -> String {
    values.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
