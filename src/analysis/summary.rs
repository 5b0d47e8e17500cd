//! Summary statistics for noise sample sets
//!
//! Computes the arithmetic mean and the population standard deviation of a
//! [`SampleSet`] and formats them as `<name>: <mean>+-<std_dev>`.

use crate::common::SampleSet;

/// Descriptive statistics of one sample set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    /// Population standard deviation (divides by `count`, not `count - 1`)
    pub std_dev: f64,
}

impl Summary {
    /// Computes summary statistics in two passes: mean first, then the mean squared
    /// deviation from it.
    pub fn from_samples(samples: &SampleSet) -> Self {
        let count = samples.len();
        let mean = mean(samples.values());
        let variance = samples
            .values()
            .iter()
            .map(|&value| {
                let deviation = value as f64 - mean;
                deviation * deviation
            })
            .sum::<f64>()
            / count as f64;

        Self {
            count,
            min: samples.min(),
            max: samples.max(),
            mean,
            std_dev: variance.sqrt(),
        }
    }

    /// `max - min`
    pub fn range(&self) -> u64 {
        self.max.abs_diff(self.min)
    }
}

fn mean(values: &[i64]) -> f64 {
    values.iter().map(|&value| value as f64).sum::<f64>() / values.len() as f64
}

/// Formats the stdout summary line for a dataset, `<name>: <mean>+-<std_dev>`.
///
/// Values use shortest round-trip formatting and always keep a decimal point, e.g.
/// `no_capa: 2.0+-0.816496580927726`.
pub fn format_summary_line(name: &str, summary: &Summary) -> String {
    format!("{}: {:?}+-{:?}", name, summary.mean, summary.std_dev)
}
