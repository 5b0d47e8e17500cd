//! Histogram binning for noise sample sets
//!
//! Each sample set is split into as many equal-width bins as its value range
//! (`max - min`), so integer samples end up one value per bin. The last bin is closed
//! on both ends so that the maximum sample is always counted.

use super::constants::{DEGENERATE_BIN_HALF_WIDTH, MAX_HISTOGRAM_BINS};
use crate::common::SampleSet;

/// Errors that can occur while binning a sample set
#[derive(Debug)]
pub enum HistogramError {
    TooManyBins(u64),
}

impl std::fmt::Display for HistogramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistogramError::TooManyBins(bins) => write!(
                f,
                "Cannot allocate {} histogram bins (limit is {})",
                bins, MAX_HISTOGRAM_BINS
            ),
        }
    }
}

impl std::error::Error for HistogramError {}

type Result<T> = core::result::Result<T, HistogramError>;

/// Number of bins to draw for a sample set: its range, `max - min`.
pub fn histogram_bin_count(samples: &SampleSet) -> u64 {
    samples.range()
}

/// Equal-width histogram of a sample set
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `counts.len() + 1` ascending bin edges
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bins `samples` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// If every sample has the same value `v`, the bins span `[v - 0.5, v + 0.5]`
    /// instead. A request for zero bins (which is what a zero range asks for) is
    /// treated as a request for a single bin.
    ///
    /// # Arguments
    /// * `samples` - The sample set to bin
    /// * `bins` - Requested number of bins, usually [`histogram_bin_count`]
    ///
    /// # Returns
    /// * `Ok(Histogram)` - Bins whose counts sum to `samples.len()`
    /// * `Err(HistogramError)` - If `bins` exceeds [`MAX_HISTOGRAM_BINS`] or the bins
    ///   cannot be allocated
    pub fn from_samples(samples: &SampleSet, bins: u64) -> Result<Self> {
        let requested = bins;
        let bins = bins.max(1);
        if bins > MAX_HISTOGRAM_BINS {
            return Err(HistogramError::TooManyBins(requested));
        }
        let bins = usize::try_from(bins).map_err(|_| HistogramError::TooManyBins(requested))?;

        let (low, high) = if samples.min() == samples.max() {
            let value = samples.min() as f64;
            log::warn!(
                "All {} samples equal {}; drawing a single bin",
                samples.len(),
                value
            );
            (
                value - DEGENERATE_BIN_HALF_WIDTH,
                value + DEGENERATE_BIN_HALF_WIDTH,
            )
        } else {
            (samples.min() as f64, samples.max() as f64)
        };

        let width = (high - low) / bins as f64;
        let mut edges: Vec<f64> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        edges
            .try_reserve_exact(bins + 1)
            .and_then(|_| counts.try_reserve_exact(bins))
            .map_err(|_| HistogramError::TooManyBins(requested))?;

        edges.extend((0..bins).map(|index| low + index as f64 * width));
        edges.push(high);
        counts.resize(bins, 0);
        for &value in samples.values() {
            let offset = (value as f64 - low) / width;
            let index = (offset.floor() as usize).min(bins - 1);
            counts[index] += 1;
        }

        log::debug!(
            "Binned {} samples into {} bins over [{}, {}]",
            samples.len(),
            bins,
            low,
            high
        );

        Ok(Self { edges, counts })
    }

    /// Sample count per bin
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Ascending bin edges; one more than there are bins
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Iterates `(start, end, count)` for every bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(self.counts.iter())
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }

    /// Lower edge of the first bin
    pub fn low(&self) -> f64 {
        self.edges[0]
    }

    /// Upper edge of the last bin
    pub fn high(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Count of the fullest bin
    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
