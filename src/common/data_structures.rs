use crate::analysis::constants::{
    NO_CAPACITOR_FILE, NO_CAPACITOR_LABEL, NO_CAPACITOR_NAME, WITH_CAPACITOR_FILE,
    WITH_CAPACITOR_LABEL, WITH_CAPACITOR_NAME,
};
use plotters::style::{RGBColor, BLUE, RED};

/// An ordered, non-empty sequence of noise samples read from one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    values: Vec<i64>,
    min: i64,
    max: i64,
}

impl SampleSet {
    /// Wraps the given samples, returning [`None`] if there are none.
    pub fn new(values: Vec<i64>) -> Option<Self> {
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;
        Some(Self { values, min, max })
    }

    /// Samples in file order
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no samples. [`SampleSet::new`] rejects empty input, so a
    /// constructed set is never empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Distance between the largest and smallest sample.
    ///
    /// This is also the number of histogram bins drawn for the set.
    pub fn range(&self) -> u64 {
        self.max.abs_diff(self.min)
    }
}

/// Measurement condition under which a sample set was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    NoCapacitor,
    WithCapacitor,
}

impl Condition {
    /// Both conditions, in plotting and reporting order.
    pub const ALL: [Condition; 2] = [Condition::NoCapacitor, Condition::WithCapacitor];

    /// Name of the input file holding samples for this condition
    pub fn file_name(self) -> &'static str {
        match self {
            Condition::NoCapacitor => NO_CAPACITOR_FILE,
            Condition::WithCapacitor => WITH_CAPACITOR_FILE,
        }
    }

    /// Name used on the stdout summary line and in the analysis report
    pub fn name(self) -> &'static str {
        match self {
            Condition::NoCapacitor => NO_CAPACITOR_NAME,
            Condition::WithCapacitor => WITH_CAPACITOR_NAME,
        }
    }

    /// Legend entry on the histogram plot
    pub fn legend_label(self) -> &'static str {
        match self {
            Condition::NoCapacitor => NO_CAPACITOR_LABEL,
            Condition::WithCapacitor => WITH_CAPACITOR_LABEL,
        }
    }

    pub fn color(self) -> RGBColor {
        match self {
            Condition::NoCapacitor => BLUE,
            Condition::WithCapacitor => RED,
        }
    }
}

/// A loaded sample set together with the condition it was measured under
#[derive(Debug, Clone)]
pub struct Dataset {
    pub condition: Condition,
    pub samples: SampleSet,
}

impl Dataset {
    pub fn new(condition: Condition, samples: SampleSet) -> Self {
        Self {
            condition,
            samples,
        }
    }
}
