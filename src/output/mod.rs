//! Result reporting
//!
//! - `text`: human-readable console output
//! - `json`: machine-readable report file
//! - `csv`: chart points or comparison table for spreadsheets and plotting tools

pub mod csv;
pub mod json;
pub mod text;
