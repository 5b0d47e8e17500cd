//! # noise-histogram
//!
//! Compares two sets of integer noise samples, recorded with and without a smoothing
//! capacitor. The two sets are drawn as overlaid histograms and the mean and population
//! standard deviation of each are printed.
//!
//! The pipeline is load → plot → show → report; see [`run`].

pub mod analysis;
pub mod common;
pub mod loading;

use analysis::constants::{PLOT_FILE, PLOT_RESOLUTION, WINDOW_TITLE};
use analysis::histogram::{histogram_bin_count, Histogram};
use analysis::report::{generate_analysis_report, ReportSection};
use analysis::summary::{format_summary_line, Summary};
use common::display::show_until_closed;
use common::plots::{
    render_overlay_histogram, render_overlay_histogram_rgb, ChartText, HistogramSeries,
};
use common::{Condition, Dataset};
use loading::load_samples;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while comparing noise samples
#[derive(Error, Debug)]
pub enum NoiseError {
    #[error("Loading error: {0}")]
    Loading(#[from] loading::LoadingError),

    #[error("Histogram error: {0}")]
    Histogram(#[from] analysis::histogram::HistogramError),

    #[error("Plot error: {0}")]
    Plot(#[from] common::PlotError),

    #[error("Display error: {0}")]
    Display(#[from] common::DisplayError),

    #[error("Report error: {0}")]
    Report(#[from] analysis::report::ReportError),

    #[error("Failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, NoiseError>;

/// Whether [`run`] shows the histogram overlay on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Open a window and wait for the viewer to close it
    Window,
    /// Only write the PNG
    Headless,
}

const CHART_TEXT: ChartText<'static> = ChartText {
    title: WINDOW_TITLE,
    x_label: "Sample Value",
};

/// Loads the sample file of every [`Condition`] from `input_dir`, in reporting order.
///
/// Stops at the first file that fails to load.
pub fn load_datasets(input_dir: &Path) -> Result<Vec<Dataset>> {
    Condition::ALL
        .iter()
        .map(|&condition| -> Result<Dataset> {
            let samples = load_samples(&input_dir.join(condition.file_name()))?;
            Ok(Dataset::new(condition, samples))
        })
        .collect()
}

/// Bins every dataset into `max - min` bins.
pub fn build_histograms(datasets: &[Dataset]) -> Result<Vec<Histogram>> {
    datasets
        .iter()
        .map(|dataset| -> Result<Histogram> {
            let bins = histogram_bin_count(&dataset.samples);
            log::debug!("{}: {} bins", dataset.condition.name(), bins);
            Ok(Histogram::from_samples(&dataset.samples, bins)?)
        })
        .collect()
}

/// Pairs every histogram with its condition's legend label and color.
pub fn plot_series<'a>(
    datasets: &'a [Dataset],
    histograms: &'a [Histogram],
) -> Vec<HistogramSeries<'a>> {
    datasets
        .iter()
        .zip(histograms)
        .map(|(dataset, histogram)| HistogramSeries {
            histogram,
            label: dataset.condition.legend_label(),
            color: dataset.condition.color(),
        })
        .collect()
}

/// Draws all histograms on one chart, each in its condition's color, and saves it
/// to [`PLOT_FILE`] in `output_dir`.
pub fn plot_histograms(
    datasets: &[Dataset],
    histograms: &[Histogram],
    output_dir: &Path,
) -> Result<()> {
    let output_path = output_dir.join(PLOT_FILE);
    render_overlay_histogram(
        &plot_series(datasets, histograms),
        CHART_TEXT,
        &output_path,
    )?;

    log::info!("Wrote histogram plot to {}", output_path.display());
    Ok(())
}

/// Shows the same chart as [`plot_histograms`] in a window and blocks until the
/// viewer closes it.
pub fn show_histograms(datasets: &[Dataset], histograms: &[Histogram]) -> Result<()> {
    let frame = render_overlay_histogram_rgb(&plot_series(datasets, histograms), CHART_TEXT)?;
    show_until_closed(WINDOW_TITLE, &frame, PLOT_RESOLUTION)?;
    Ok(())
}

/// Writes one `<name>: <mean>+-<std_dev>` line per dataset to `out`.
pub fn write_summaries<W: Write>(summaries: &[(&Dataset, Summary)], out: &mut W) -> Result<()> {
    for (dataset, summary) in summaries {
        writeln!(
            out,
            "{}",
            format_summary_line(dataset.condition.name(), summary)
        )?;
    }
    Ok(())
}

/// Runs the full comparison against the sample files in `working_dir`.
///
/// Writes the plot into `working_dir` and, with [`DisplayMode::Window`], shows it until
/// the window is closed. Then writes the analysis report into `working_dir` and the
/// summary lines to `out`. Nothing is written if either sample file fails to load.
pub fn run<W: Write>(working_dir: &Path, out: &mut W, display: DisplayMode) -> Result<()> {
    let datasets = load_datasets(working_dir)?;
    let histograms = build_histograms(&datasets)?;

    plot_histograms(&datasets, &histograms, working_dir)?;
    if display == DisplayMode::Window {
        show_histograms(&datasets, &histograms)?;
    }

    let summaries: Vec<(&Dataset, Summary)> = datasets
        .iter()
        .map(|dataset| (dataset, Summary::from_samples(&dataset.samples)))
        .collect();

    let sections: Vec<ReportSection> = summaries
        .iter()
        .zip(&histograms)
        .map(|(&(dataset, ref summary), histogram)| ReportSection {
            dataset,
            histogram,
            summary,
        })
        .collect();
    let report_path = generate_analysis_report(&sections, working_dir)?;
    log::info!("Wrote analysis report to {}", report_path.display());

    write_summaries(&summaries, out)
}
