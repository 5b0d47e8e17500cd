//! Plotting infrastructure for overlaid histogram charts
//!
//! This module renders one or more histograms onto a shared chart using the
//! [`plotters`] crate. Charts are rendered at
//! [`PLOT_RESOLUTION`](crate::analysis::constants::PLOT_RESOLUTION), either to a PNG
//! file or to an RGB buffer for on-screen display.

use crate::analysis::constants::{PLOT_RESOLUTION, PLOT_Y_HEADROOM};
use crate::analysis::histogram::Histogram;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// One histogram to draw, with its legend label and fill color
#[derive(Debug, Clone, Copy)]
pub struct HistogramSeries<'a> {
    pub histogram: &'a Histogram,
    pub label: &'a str,
    pub color: RGBColor,
}

/// Axis bounds covering every bin of every series
///
/// Returns `(x_min, x_max, y_max)`, where `y_max` includes headroom above the
/// tallest bin.
fn chart_bounds(series: &[HistogramSeries]) -> (f64, f64, f64) {
    let x_min = series
        .iter()
        .map(|s| s.histogram.low())
        .fold(f64::INFINITY, f64::min);
    let x_max = series
        .iter()
        .map(|s| s.histogram.high())
        .fold(f64::NEG_INFINITY, f64::max);
    let peak = series
        .iter()
        .map(|s| s.histogram.peak())
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    (x_min, x_max, peak * (1.0 + PLOT_Y_HEADROOM))
}

/// Text drawn around the plot area: caption, axis descriptions and legend
#[derive(Debug, Clone, Copy)]
pub struct ChartText<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
}

/// Draws overlaid histograms onto any plotters drawing area
///
/// Series are drawn in order, so later series are painted over earlier ones where
/// their bins overlap. With `text` set, the chart gets a caption, a labelled mesh and
/// a legend entry per series; without it only the bars are drawn, which needs no
/// font.
///
/// # Arguments
/// * `drawing_area` - Target area, e.g. from a [`BitMapBackend`]
/// * `series` - Histograms to draw, in drawing order
/// * `text` - Caption and axis label, or [`None`] for bars only
///
/// # Returns
/// * `Ok(())` - If the chart was drawn and presented
/// * `Err(PlotError)` - If an error occurred during chart generation
pub fn draw_overlay_histogram<DB: DrawingBackend>(
    drawing_area: &DrawingArea<DB, Shift>,
    series: &[HistogramSeries],
    text: Option<ChartText>,
) -> Result<()> {
    if series.is_empty() {
        return Err(PlotError::InvalidData(
            "At least one histogram is required".to_string(),
        ));
    }

    let (x_min, x_max, y_max) = chart_bounds(series);

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut builder = ChartBuilder::on(drawing_area);
    builder.margin(20).x_label_area_size(60).y_label_area_size(85);
    if let Some(text) = text {
        builder.caption(text.title, ("sans-serif", 40));
    }

    let mut chart_context = builder
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    if let Some(text) = text {
        chart_context
            .configure_mesh()
            .x_desc(text.x_label)
            .y_desc("Samples")
            .label_style(("sans-serif", 25))
            .x_label_formatter(&|x| format!("{:.0}", x.round()))
            .y_label_formatter(&|y| format!("{:.0}", y.round()))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    for entry in series {
        let color = entry.color;
        let bars = entry.histogram.bins().map(move |(start, end, count)| {
            Rectangle::new([(start, 0.0), (end, count as f64)], color.filled())
        });

        chart_context
            .draw_series(bars)
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(entry.label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 20, y + 6)], color.filled()));
    }

    if text.is_some() {
        chart_context
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(("sans-serif", 25))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    // Ensure everything is properly rendered and saved
    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates an overlaid histogram chart and saves it as a PNG file
///
/// # Arguments
/// * `series` - Histograms to draw, in drawing order
/// * `text` - Caption and axis label
/// * `output_path` - Path where the PNG file should be saved
///
/// # Headless Compatibility
/// Uses plotters' bitmap backend, so no display server is required. Text rendering
/// (caption, axis labels, legend) still needs a system font.
pub fn render_overlay_histogram(
    series: &[HistogramSeries],
    text: ChartText,
    output_path: &Path,
) -> Result<()> {
    let drawing_area = BitMapBackend::new(output_path, PLOT_RESOLUTION).into_drawing_area();
    draw_overlay_histogram(&drawing_area, series, Some(text))
}

/// Renders an overlaid histogram chart into an RGB pixel buffer
///
/// The buffer holds [`PLOT_RESOLUTION`] pixels, row by row, three bytes per pixel.
pub fn render_overlay_histogram_rgb(
    series: &[HistogramSeries],
    text: ChartText,
) -> Result<Vec<u8>> {
    let (width, height) = PLOT_RESOLUTION;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let drawing_area =
            BitMapBackend::with_buffer(&mut buffer, PLOT_RESOLUTION).into_drawing_area();
        draw_overlay_histogram(&drawing_area, series, Some(text))?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SampleSet;
    use std::fs;

    fn histogram(values: &[i64], bins: u64) -> Histogram {
        Histogram::from_samples(&SampleSet::new(values.to_vec()).unwrap(), bins).unwrap()
    }

    #[test]
    fn test_chart_bounds_cover_all_series() {
        let first = histogram(&[10, 12, 12, 14], 4);
        let second = histogram(&[11, 11, 11, 20], 9);
        let series = [
            HistogramSeries {
                histogram: &first,
                label: "first",
                color: BLUE,
            },
            HistogramSeries {
                histogram: &second,
                label: "second",
                color: RED,
            },
        ];

        let (x_min, x_max, y_max) = chart_bounds(&series);
        assert_eq!(x_min, 10.0);
        assert_eq!(x_max, 20.0);
        assert!((y_max - 3.3).abs() < 1e-9);
    }

    const TEST_TEXT: ChartText = ChartText {
        title: "Test Overlay",
        x_label: "Sample",
    };

    /// Draws `series` without text into a small RGB buffer.
    fn draw_bars_only(series: &[HistogramSeries]) -> Vec<u8> {
        let size = (300u32, 200u32);
        let mut buffer = vec![0u8; size.0 as usize * size.1 as usize * 3];
        {
            let drawing_area = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            draw_overlay_histogram(&drawing_area, series, None).unwrap();
        }
        buffer
    }

    fn contains_pixel(buffer: &[u8], color: RGBColor) -> bool {
        buffer
            .chunks_exact(3)
            .any(|pixel| pixel == [color.0, color.1, color.2])
    }

    #[test]
    fn test_render_requires_series() {
        let output_path = std::env::temp_dir().join("test_empty_overlay.png");
        let result = render_overlay_histogram(&[], TEST_TEXT, &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_bars_drawn_in_series_colors() {
        let first = histogram(&[1, 2, 2, 3, 3, 3], 2);
        let second = histogram(&[8, 9, 9, 10], 2);
        let series = [
            HistogramSeries {
                histogram: &first,
                label: "no capa",
                color: BLUE,
            },
            HistogramSeries {
                histogram: &second,
                label: "with capa",
                color: RED,
            },
        ];

        let buffer = draw_bars_only(&series);
        assert!(contains_pixel(&buffer, BLUE));
        assert!(contains_pixel(&buffer, RED));
        assert!(contains_pixel(&buffer, WHITE));
    }

    #[test]
    fn test_later_series_painted_over_earlier() {
        let first = histogram(&[4, 4, 5], 1);
        let second = histogram(&[4, 4, 5], 1);
        let series = [
            HistogramSeries {
                histogram: &first,
                label: "below",
                color: BLUE,
            },
            HistogramSeries {
                histogram: &second,
                label: "above",
                color: RED,
            },
        ];

        let buffer = draw_bars_only(&series);
        assert!(!contains_pixel(&buffer, BLUE));
        assert!(contains_pixel(&buffer, RED));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_overlay_histogram_success() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("test_overlay.png");

        let first = histogram(&[1, 2, 2, 3, 3, 3], 2);
        let second = histogram(&[5, 5, 5], 0);
        let series = [
            HistogramSeries {
                histogram: &first,
                label: "no capa",
                color: BLUE,
            },
            HistogramSeries {
                histogram: &second,
                label: "with capa",
                color: RED,
            },
        ];

        let result = render_overlay_histogram(&series, TEST_TEXT, &output_path);
        assert!(result.is_ok());
        assert!(fs::metadata(&output_path).unwrap().len() > 0);
    }
}
