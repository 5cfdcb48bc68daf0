//! Closed-form projectile motion without air resistance: landing time,
//! frame-rate sampling of the path, and the plumbing to report, chart and
//! animate it.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod report;
pub mod simulation;

pub use crate::config::{LaunchInputs, SimulationConfig};
pub use crate::core::ballistics::{
    FlightDuration, LaunchParameters, Trajectory, TrajectorySample, sample, solve,
};
pub use crate::core::error::SolverError;
pub use crate::core::playback::Playback;
pub use crate::core::summary::FlightSummary;
pub use crate::error::{Error, Result};
