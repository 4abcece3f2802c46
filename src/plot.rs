use std::ops::Range;
use std::path::Path;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::prelude::*;

use crate::error::AnalysisError;
use crate::samples::time_axis;

const CANVAS_SIZE: (u32, u32) = (2000, 1000);
const X_TICKS: usize = 7;

/// Time coordinate whose labels are exactly `X_TICKS` evenly spaced
/// marks spanning the whole range, instead of the default "nice"
/// rounded key points.
#[derive(Clone)]
struct EvenTimeCoord(Range<f64>);

impl Ranged for EvenTimeCoord {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span = self.0.end - self.0.start;
        if span == 0.0 {
            return limit.0;
        }
        let ratio = (value - self.0.start) / span;
        limit.0 + (ratio * (limit.1 - limit.0) as f64) as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        let count = hint.max_num_points().min(X_TICKS);
        if count < 2 {
            return vec![self.0.start];
        }
        let step = (self.0.end - self.0.start) / (count - 1) as f64;
        (0..count).map(|i| self.0.start + step * i as f64).collect()
    }

    fn range(&self) -> Range<f64> {
        self.0.clone()
    }
}

/// Render the current trace to a PNG at `png_path`.
///
/// Markers at every point with a connecting semi-transparent line,
/// matching the capture review plots. The backend is presented and
/// dropped before returning, so repeated calls do not accumulate
/// canvases.
pub fn render_series(
    samples: &[f64],
    sample_interval: f64,
    png_path: &Path,
) -> Result<(), AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::NoSamples);
    }

    let axis = time_axis(samples.len(), sample_interval);
    let t_max = axis.last().copied().unwrap_or(0.0).max(sample_interval);

    let y_min = samples.iter().copied().fold(f64::MAX, f64::min);
    let y_max = samples.iter().copied().fold(f64::MIN, f64::max);
    let y_bounds = if (y_max - y_min).abs() < f64::EPSILON {
        (y_min - 0.5, y_max + 0.5)
    } else {
        let pad = (y_max - y_min) * 0.05;
        (y_min - pad, y_max + pad)
    };

    let root = BitMapBackend::new(png_path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Current Measurements", ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(EvenTimeCoord(0f64..t_max), y_bounds.0..y_bounds.1)?;

    chart
        .configure_mesh()
        .x_labels(X_TICKS)
        .x_desc("Sample Index")
        .y_desc("Value")
        .draw()?;

    let style = BLUE.mix(0.8);
    chart.draw_series(LineSeries::new(
        axis.iter().zip(samples.iter()).map(|(&t, &y)| (t, y)),
        &style,
    ))?;
    chart.draw_series(
        axis.iter()
            .zip(samples.iter())
            .map(|(&t, &y)| Circle::new((t, y), 1, style.filled())),
    )?;

    root.present()?;
    Ok(())
}
