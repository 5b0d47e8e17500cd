//! Noise sample analysis
//!
//! This module contains:
//! - Fixed configuration (file names, labels, output settings)
//! - Histogram binning
//! - Summary statistics and the stdout summary line
//! - The text analysis report

pub mod constants;
pub mod histogram;
pub mod report;
pub mod summary;

// Re-export analysis functions for convenience
pub use histogram::{histogram_bin_count, Histogram};
pub use report::generate_analysis_report;
pub use summary::{format_summary_line, Summary};
