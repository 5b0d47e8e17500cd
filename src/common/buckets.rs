//! Histogram bin tables for the analysis report
//!
//! This module provides:
//! - [`BucketEntry`] type for representing one histogram bin with range, count, and percentage
//! - ASCII table formatting using the [`tabled`] crate

use crate::analysis::histogram::Histogram;
use tabled::{Table, Tabled};

/// Represents a single histogram bin with its range, count, and percentage
#[derive(Debug, Clone, Tabled)]
pub struct BucketEntry {
    /// Bin range, e.g. `[12, 13)`; the last bin is closed, e.g. `[19, 20]`
    #[tabled(rename = "Range")]
    pub range: String,
    /// Number of samples in this bin
    #[tabled(rename = "Count")]
    pub count: usize,
    /// Percentage of all samples in this bin
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

impl BucketEntry {
    /// Creates a new bucket entry with formatted percentage
    ///
    /// `total` is the sample count of the whole histogram, which is never zero.
    pub fn new(range: String, count: usize, total: usize) -> Self {
        Self {
            range,
            count,
            percentage: format!("{:.2}%", (count as f64 / total as f64) * 100.0),
        }
    }
}

/// Converts every bin of a [`Histogram`] into a [`BucketEntry`].
pub fn histogram_buckets(histogram: &Histogram) -> Vec<BucketEntry> {
    let total = histogram.total();
    let last = histogram.bin_count() - 1;

    histogram
        .bins()
        .enumerate()
        .map(|(index, (start, end, count))| {
            let close = if index == last { ']' } else { ')' };
            BucketEntry::new(format!("[{}, {}{}", start, end, close), count, total)
        })
        .collect()
}

/// Formats bucket entries as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `buckets` - A slice of [`BucketEntry`] to format
/// * `title` - Title printed above the table, underlined with `=`
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_bucket_table(buckets: &[BucketEntry], title: &str) -> String {
    let table = Table::new(buckets).to_string();
    format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SampleSet;

    #[test]
    fn test_bucket_entry_new() {
        let entry = BucketEntry::new("[1, 2)".to_string(), 25, 100);
        assert_eq!(entry.range, "[1, 2)");
        assert_eq!(entry.count, 25);
        assert_eq!(entry.percentage, "25.00%");

        let entry_third = BucketEntry::new("[2, 3]".to_string(), 1, 3);
        assert_eq!(entry_third.percentage, "33.33%");
    }

    #[test]
    fn test_histogram_buckets() {
        let samples = SampleSet::new(vec![10, 11, 11, 12]).unwrap();
        let histogram = Histogram::from_samples(&samples, 2).unwrap();
        let buckets = histogram_buckets(&histogram);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].range, "[10, 11)");
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[0].percentage, "25.00%");
        assert_eq!(buckets[1].range, "[11, 12]");
        assert_eq!(buckets[1].count, 3);
        assert_eq!(buckets[1].percentage, "75.00%");
    }

    #[test]
    fn test_histogram_buckets_single_value() {
        let samples = SampleSet::new(vec![5, 5, 5]).unwrap();
        let histogram = Histogram::from_samples(&samples, 0).unwrap();
        let buckets = histogram_buckets(&histogram);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].range, "[4.5, 5.5]");
        assert_eq!(buckets[0].percentage, "100.00%");
    }

    #[test]
    fn test_format_bucket_table() {
        let buckets = vec![
            BucketEntry::new("[1, 2)".to_string(), 10, 100),
            BucketEntry::new("[2, 3]".to_string(), 20, 100),
        ];

        let table = format_bucket_table(&buckets, "Test Table");
        assert!(table.starts_with("Test Table\n==========\n"));
        assert!(table.contains("Range"));
        assert!(table.contains("Count"));
        assert!(table.contains("Percentage"));
        assert!(table.contains("[1, 2)"));
        assert!(table.contains("10.00%"));
    }

    #[test]
    fn test_format_bucket_table_from_histogram() {
        let samples = SampleSet::new(vec![5, 5, 5]).unwrap();
        let histogram = Histogram::from_samples(&samples, 0).unwrap();

        let table = format_bucket_table(&histogram_buckets(&histogram), "with_capa");
        assert!(table.starts_with("with_capa\n=========\n"));
        assert!(table.contains("[4.5, 5.5]"));
        assert!(table.contains("100.00%"));
    }
}
