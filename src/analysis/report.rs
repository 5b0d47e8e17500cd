//! Text analysis report
//!
//! Writes one histogram bin table and one summary block per dataset to
//! [`REPORT_FILE`](super::constants::REPORT_FILE).

use super::constants::REPORT_FILE;
use super::histogram::Histogram;
use super::summary::Summary;
use crate::common::buckets::{format_bucket_table, histogram_buckets};
use crate::common::Dataset;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while writing the analysis report
#[derive(Debug)]
pub enum ReportError {
    FileWrite(std::io::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::FileWrite(e) => write!(f, "Failed to write report: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::FileWrite(err)
    }
}

type Result<T> = core::result::Result<T, ReportError>;

/// Everything the report needs to know about one dataset
pub struct ReportSection<'a> {
    pub dataset: &'a Dataset,
    pub histogram: &'a Histogram,
    pub summary: &'a Summary,
}

/// Generate the complete analysis report
///
/// For every dataset, writes a titled bin table followed by a summary block with the
/// sample count, extremes, range, mean and standard deviation.
///
/// # Arguments
/// * `sections` - One entry per dataset, in report order
/// * `output_dir` - Directory where the report file should be saved
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written report
/// * `Err(ReportError)` - If the file could not be written
pub fn generate_analysis_report(sections: &[ReportSection], output_dir: &Path) -> Result<PathBuf> {
    let body = sections
        .iter()
        .map(format_section)
        .collect::<Vec<_>>()
        .join("\n\n");

    let output = format!("Noise Histogram Analysis\n{}\n\n{}\n", "=".repeat(24), body);

    let output_file = output_dir.join(REPORT_FILE);
    fs::write(&output_file, output)?;

    Ok(output_file)
}

fn format_section(section: &ReportSection) -> String {
    let name = section.dataset.condition.name();
    let title = format!(
        "{} ({}) Histogram",
        name,
        section.dataset.condition.file_name()
    );
    let table = format_bucket_table(&histogram_buckets(section.histogram), &title);

    let summary = section.summary;
    format!(
        "{}\n\nSummary\n{}\nSamples: {}\nMin: {}\nMax: {}\nRange: {}\nMean: {:?}\nStd dev: {:?}",
        table,
        "=".repeat(7),
        summary.count,
        summary.min,
        summary.max,
        summary.range(),
        summary.mean,
        summary.std_dev
    )
}
