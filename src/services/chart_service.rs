use std::fs;
use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::models::TimingSample;
use crate::utils::ChartError;

/// Output bitmap size in pixels
const CHART_WIDTH: u32 = 1024;
const CHART_HEIGHT: u32 = 768;

const CHART_TITLE: &str = "Average time to generate primes";
const X_LABEL: &str = "Primes size (bits)";
const Y_LABEL: &str = "Time (s)";

/// Render the benchmark samples as a line chart PNG at `output`.
///
/// The bitmap is drawn into a sibling temp file and renamed over the final
/// path only once fully rendered, so a previous chart is never replaced by
/// a partial one.
pub fn render_chart(samples: &[TimingSample], output: &Path) -> Result<(), ChartError> {
    if samples.is_empty() {
        return Err(ChartError::EmptyDataset);
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(ChartError::OutputWrite {
                path: output.display().to_string(),
                reason: format!("directory '{}' does not exist", parent.display()),
            });
        }
    }

    let temp_path = output.with_extension("png.tmp");

    if let Err(e) = draw_bitmap(samples, &temp_path) {
        // Clean up temporary file
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, output).map_err(|e| ChartError::OutputWrite {
        path: output.display().to_string(),
        reason: e.to_string(),
    })?;

    debug!("Rendered {} samples to {}", samples.len(), output.display());

    Ok(())
}

fn draw_bitmap(samples: &[TimingSample], path: &Path) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(format!("Failed to fill canvas: {}", e)))?;

    // Find the time range
    let min_seconds = samples
        .iter()
        .map(|s| s.seconds)
        .fold(f64::INFINITY, f64::min);
    let max_seconds = samples
        .iter()
        .map(|s| s.seconds)
        .fold(f64::NEG_INFINITY, f64::max);

    // Add some padding to the time range
    let range = (max_seconds - min_seconds).max(1e-8); // Avoid a zero-height axis
    let padding = range * 0.1;
    let y_min = (min_seconds - padding).max(0.0);
    let y_max = max_seconds + padding;

    // Bit-size range, widened when every sample has the same size
    let x_min = samples.iter().map(|s| s.bits).min().unwrap_or(0);
    let x_max = samples
        .iter()
        .map(|s| s.bits)
        .max()
        .unwrap_or(0)
        .max(x_min.saturating_add(1));

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| ChartError::Render(format!("Failed to build chart: {}", e)))?;

    // Configure mesh
    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(|e| ChartError::Render(format!("Failed to draw mesh: {}", e)))?;

    // Draw the timing curve, with a circle at each measured point
    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.bits, s.seconds)),
            &BLUE,
        ))
        .map_err(|e| ChartError::Render(format!("Failed to draw line: {}", e)))?;

    chart
        .draw_series(
            samples
                .iter()
                .map(|s| Circle::new((s.bits, s.seconds), 3, BLUE.filled())),
        )
        .map_err(|e| ChartError::Render(format!("Failed to draw points: {}", e)))?;

    root.present()
        .map_err(|e| ChartError::Render(format!("Failed to render chart: {}", e)))?;

    Ok(())
}
