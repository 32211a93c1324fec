//! CSV output formatting
//!
//! Two layouts:
//! - **Chart**: one row per walk point (`algorithm,step,label,position,distance`),
//!   ready for a line chart of head position over time
//! - **Comparison**: one row per algorithm (`algorithm,name,total_seek_time,average_seek_time`),
//!   ready for a bar chart

use crate::sched::{Comparison, SimulationResult};
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV writer for simulation output
pub struct CsvWriter {
    writer: BufWriter<File>,
}

impl CsvWriter {
    /// Create a chart-points CSV and write its header
    pub fn new_chart(path: &Path) -> Result<Self> {
        let mut writer = Self::create(path)?;
        writeln!(writer.writer, "algorithm,step,label,position,distance")?;
        Ok(writer)
    }

    /// Create a comparison CSV and write its header
    pub fn new_comparison(path: &Path) -> Result<Self> {
        let mut writer = Self::create(path)?;
        writeln!(writer.writer, "algorithm,name,total_seek_time,average_seek_time")?;
        Ok(writer)
    }

    fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV output: {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Append every chart point of a result
    ///
    /// The head row has step 0 and distance 0.
    pub fn append_result(&mut self, result: &SimulationResult) -> Result<()> {
        let mut previous = result.head;
        for point in &result.chart_points {
            writeln!(
                self.writer,
                "{},{},{},{},{}",
                result.algorithm.short_name(),
                point.index.unwrap_or(0),
                point.label,
                point.position,
                point.position.abs_diff(previous)
            )?;
            previous = point.position;
        }
        Ok(())
    }

    /// Append the comparison table
    pub fn append_comparison(&mut self, comparison: &Comparison) -> Result<()> {
        for row in &comparison.rows {
            writeln!(
                self.writer,
                "{},{},{},{:.4}",
                row.algorithm.key(),
                row.name,
                row.total_seek_time,
                row.average_seek_time
            )?;
        }
        Ok(())
    }

    /// Flush buffered rows to disk
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
