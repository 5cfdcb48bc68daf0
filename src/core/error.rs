use thiserror::Error;

/// Reasons the solver could not produce a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolverError {
    /// No non-negative landing time exists for these parameters.
    #[error("no real landing time: discriminant vy^2 + 2*g*y0 is {discriminant}")]
    DegenerateInput { discriminant: f64 },

    /// Gravity is zero and the projectile never crosses ground level.
    #[error("no landing time without gravity: vertical speed {vertical_speed_mps} m/s from height {height_m} m")]
    NeverLands {
        vertical_speed_mps: f64,
        height_m: f64,
    },

    #[error("input '{field}' must be a finite number (got {value})")]
    NonFiniteInput { field: &'static str, value: f64 },

    #[error("frame rate must be a positive finite number (got {0})")]
    InvalidFrameRate(f64),

    /// Finite inputs whose result does not fit in an f64.
    #[error("{quantity} overflows for these inputs")]
    Overflow { quantity: &'static str },

    #[error("trajectory would need {requested} samples, limit is {limit}")]
    TooManySamples { requested: f64, limit: usize },
}

impl SolverError {
    /// True for the outcomes where the physics has no valid trajectory, as
    /// opposed to bad arguments from the caller.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            SolverError::DegenerateInput { .. } | SolverError::NeverLands { .. }
        )
    }
}
