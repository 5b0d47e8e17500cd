//! Common infrastructure shared across analysis steps
//!
//! This module provides reusable infrastructure for:
//! - Sample set and dataset types
//! - Bin tables and ASCII table formatting
//! - Plotting overlaid histogram charts
//! - Showing a rendered chart in a window

pub mod buckets;
pub mod data_structures;
pub mod display;
pub mod plots;

// Re-export commonly used items
pub use data_structures::{Condition, Dataset, SampleSet};
pub use display::DisplayError;
pub use plots::PlotError;
