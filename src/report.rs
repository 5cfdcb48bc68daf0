use std::fmt;

use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::Serialize;

use crate::config::LaunchInputs;
use crate::core::ballistics::{Trajectory, TrajectorySample};
use crate::core::summary::FlightSummary;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: String,
    pub inputs: LaunchInputs,
    pub frame_rate_hz: f64,
    pub frames: usize,
    pub summary: FlightSummary,
    pub samples: &'a [TrajectorySample],
}

impl<'a> Report<'a> {
    pub fn new(inputs: LaunchInputs, trajectory: &'a Trajectory, generated_at: DateTime<Local>) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339(),
            inputs,
            frame_rate_hz: trajectory.frame_rate_hz(),
            frames: trajectory.len(),
            summary: trajectory.summary(),
            samples: trajectory.samples(),
        }
    }

    /// `full` lists every sample in table output; csv and json always do.
    pub fn render(&self, format: ReportFormat, full: bool) -> Result<String> {
        match format {
            ReportFormat::Table => Ok(Table { report: self, full }.to_string()),
            ReportFormat::Csv => Ok(Csv(self).to_string()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

struct Table<'r, 'a> {
    report: &'r Report<'a>,
    full: bool,
}

impl fmt::Display for Table<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let s = &report.summary;
        writeln!(f, "Time of flight: {:.4} s", s.duration_s)?;
        writeln!(f, "Horizontal distance: {:.4} m", s.distance_m)?;
        writeln!(f, "Landing position: {:.4} m", s.range_m)?;
        writeln!(f, "Apex: {:.4} m at {:.4} s", s.apex_height_m, s.apex_time_s)?;
        writeln!(f, "Impact speed: {:.4} m/s", s.impact_speed_mps)?;
        writeln!(f, "Frames: {} at {} fps", report.frames, report.frame_rate_hz)?;
        if report.frames == 0 {
            writeln!(f, "No frames to animate.")?;
        }

        if self.full && !report.samples.is_empty() {
            writeln!(f)?;
            writeln!(f, "{:>6} {:>10} {:>12} {:>12}", "frame", "t (s)", "x (m)", "y (m)")?;
            for (frame, p) in report.samples.iter().enumerate() {
                writeln!(
                    f,
                    "{:>6} {:>10.4} {:>12.4} {:>12.4}",
                    frame, p.time_s, p.x_m, p.y_m
                )?;
            }
        }
        Ok(())
    }
}

struct Csv<'r, 'a>(&'r Report<'a>);

impl fmt::Display for Csv<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frame,time_s,x_m,y_m")?;
        for (frame, p) in self.0.samples.iter().enumerate() {
            writeln!(f, "{},{},{},{}", frame, p.time_s, p.x_m, p.y_m)?;
        }
        Ok(())
    }
}
