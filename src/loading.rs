//! Sample file loading
//!
//! This module handles reading newline-delimited integer sample files
//! (e.g. `noise-no-capacitor`) into a [`SampleSet`].

use crate::common::SampleSet;
use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a sample file
#[derive(Error, Debug)]
pub enum LoadingError {
    #[error("Failed to read sample file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid sample on line {line} of {}: {content:?} ({source})", .path.display())]
    InvalidSample {
        path: PathBuf,
        line: usize,
        content: String,
        source: ParseIntError,
    },

    #[error("Sample file {} contains no samples", .path.display())]
    NoSamples { path: PathBuf },
}

type Result<T> = core::result::Result<T, LoadingError>;

/// Load a sample file into an ordered, non-empty [`SampleSet`]
///
/// Every line is stripped of surrounding whitespace and parsed as a base-10 integer.
/// Samples keep the order in which they appear in the file. The whole load fails on
/// the first line that does not parse; no partial results are returned.
///
/// # Arguments
/// * `file_path` - Path to the sample file
///
/// # Returns
/// * `Ok(SampleSet)` - All samples in file order
/// * `Err(LoadingError)` - If the file could not be read, a line is not an integer,
///   or the file holds no lines at all
pub fn load_samples(file_path: &Path) -> Result<SampleSet> {
    let contents = fs::read_to_string(file_path).map_err(|source| LoadingError::FileRead {
        path: file_path.to_path_buf(),
        source,
    })?;

    let samples = parse_samples(&contents, file_path)?;
    let samples = SampleSet::new(samples).ok_or_else(|| LoadingError::NoSamples {
        path: file_path.to_path_buf(),
    })?;

    log::info!(
        "Loaded {} samples from {}",
        samples.len(),
        file_path.display()
    );
    Ok(samples)
}

/// Parses the text contents of a sample file, one integer per line.
///
/// `file_path` is only used for error reporting.
fn parse_samples(contents: &str, file_path: &Path) -> Result<Vec<i64>> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let trimmed = line.trim();
            trimmed
                .parse::<i64>()
                .map_err(|source| LoadingError::InvalidSample {
                    path: file_path.to_path_buf(),
                    line: index + 1,
                    content: trimmed.to_string(),
                    source,
                })
        })
        .collect()
}
