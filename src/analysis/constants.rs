//! Fixed configuration for the noise comparison
//!
//! Input file names, display names and output artifact settings. The tool takes no
//! command-line arguments; everything it reads or writes is named here.

/// Samples recorded without the smoothing capacitor
pub const NO_CAPACITOR_FILE: &str = "noise-no-capacitor";

/// Samples recorded with the smoothing capacitor fitted
pub const WITH_CAPACITOR_FILE: &str = "noise-with-capacitor";

/// Summary line names
pub const NO_CAPACITOR_NAME: &str = "no_capa";
pub const WITH_CAPACITOR_NAME: &str = "with_capa";

/// Plot legend entries
pub const NO_CAPACITOR_LABEL: &str = "no capa";
pub const WITH_CAPACITOR_LABEL: &str = "with capa";

/// Rendered histogram overlay, written to the working directory
pub const PLOT_FILE: &str = "noise-histogram.png";

/// Text analysis report, written to the working directory
pub const REPORT_FILE: &str = "noise-histogram.txt";

/// Plot resolution in pixels (width, height)
pub const PLOT_RESOLUTION: (u32, u32) = (1200, 800);

/// Fraction of the tallest bin added above it on the Y axis
pub const PLOT_Y_HEADROOM: f64 = 0.1;

/// Half width of the single bin drawn for a set whose samples are all equal
pub const DEGENERATE_BIN_HALF_WIDTH: f64 = 0.5;

/// Largest bin count a histogram may be built with. A sample set spanning a wider
/// range is rejected rather than binned.
pub const MAX_HISTOGRAM_BINS: u64 = 1 << 24;

/// Title of the window the histogram overlay is shown in
pub const WINDOW_TITLE: &str = "Noise Sample Distribution";
