use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::ballistics::Trajectory;
use crate::core::window::PlotWindow;
use crate::error::{Error, Result};

pub const CHART_SIZE: (u32, u32) = (1280, 720);

/// `trajectory_YYYYMMDD_HHMMSS.png` in the working directory.
pub fn default_chart_path(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("trajectory_{}.png", now.format("%Y%m%d_%H%M%S")))
}

/// Draws the full path to a PNG or SVG file, picked by extension.
pub fn render_chart(trajectory: &Trajectory, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("svg") => draw(SVGBackend::new(path, CHART_SIZE).into_drawing_area(), trajectory)?,
        Some("png") => draw(BitMapBackend::new(path, CHART_SIZE).into_drawing_area(), trajectory)?,
        other => {
            return Err(Error::Chart(format!(
                "unsupported chart format {:?}, use .png or .svg",
                other.unwrap_or("")
            )));
        }
    }

    tracing::info!(path = %path.display(), frames = trajectory.len(), "chart written");
    Ok(())
}

fn chart_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Chart(err.to_string())
}

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, trajectory: &Trajectory) -> Result<()> {
    let window = PlotWindow::for_trajectory(trajectory);
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Projectile Motion Simulation", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(60)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Horizontal position (m)")
        .y_desc("Vertical position (m)")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(window.x_min, 0.0), (window.x_max, 0.0)],
            BLACK.mix(0.4),
        )))
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            trajectory.iter().map(|s| (s.x_m, s.y_m)),
            &RED,
        ))
        .map_err(chart_err)?;

    let params = trajectory.parameters();
    let landing = trajectory
        .samples()
        .last()
        .map_or((params.x0_m, params.y0_m), |s| (s.x_m, s.y_m));
    chart
        .draw_series(std::iter::once(Circle::new(landing, 5, BLUE.filled())))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
