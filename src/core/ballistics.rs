use serde::Serialize;

use super::error::SolverError;
use super::summary::FlightSummary;

pub const STANDARD_GRAVITY_MPS2: f64 = 9.80665;
pub const DEFAULT_MAX_SAMPLES: usize = 1_000_000;

/// Initial conditions of a launch, angle already in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub x0_m: f64,
    pub y0_m: f64,
    pub speed_mps: f64,
    pub angle_rad: f64,
    pub gravity_mps2: f64,
}

impl LaunchParameters {
    pub fn from_degrees(
        x0_m: f64,
        y0_m: f64,
        speed_mps: f64,
        angle_deg: f64,
        gravity_mps2: f64,
    ) -> Self {
        Self {
            x0_m,
            y0_m,
            speed_mps,
            angle_rad: angle_deg.to_radians(),
            gravity_mps2,
        }
    }

    /// (vx, vy). Components within rounding of zero are snapped to zero, so
    /// sin(180°) or cos(90°) do not leave a stray 1e-16 m/s behind.
    pub fn velocity_components(&self) -> (f64, f64) {
        let snap_below = f64::EPSILON * self.speed_mps.abs();
        let snap = |v: f64| if v.abs() <= snap_below { 0.0 } else { v };
        let vx = snap(self.speed_mps * self.angle_rad.cos());
        let vy = snap(self.speed_mps * self.angle_rad.sin());
        (vx, vy)
    }

    /// Position (x, y) at `time_s` seconds after launch.
    pub fn position_at(&self, time_s: f64) -> (f64, f64) {
        let (vx, vy) = self.velocity_components();
        let x = self.x0_m + vx * time_s;
        let y = self.y0_m + (vy * time_s) - (0.5 * self.gravity_mps2 * time_s * time_s);
        (x, y)
    }

    /// b^2 - 4ac for y(t) = 0, which reduces to vy^2 + 2*g*y0.
    pub fn discriminant(&self) -> f64 {
        let (_, vy) = self.velocity_components();
        vy * vy + 2.0 * self.gravity_mps2 * self.y0_m
    }

    fn ensure_finite(&self) -> Result<(), SolverError> {
        let fields = [
            ("x0", self.x0_m),
            ("y0", self.y0_m),
            ("speed", self.speed_mps),
            ("angle", self.angle_rad),
            ("gravity", self.gravity_mps2),
        ];
        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(SolverError::NonFiniteInput { field, value }),
            None => Ok(()),
        }
    }
}

/// Time from launch until the projectile is back at y = 0. Never negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FlightDuration(f64);

impl FlightDuration {
    pub const ZERO: FlightDuration = FlightDuration(0.0);

    fn from_root(t: f64) -> Self {
        // max() may hand back -0.0 when both candidates are zero
        if t > 0.0 {
            FlightDuration(t)
        } else {
            Self::ZERO
        }
    }

    pub fn seconds(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

/// Landing time of the projectile.
pub fn solve(params: LaunchParameters) -> Result<FlightDuration, SolverError> {
    params.ensure_finite()?;

    let a = -0.5 * params.gravity_mps2;
    let (_, b) = params.velocity_components();
    let c = params.y0_m;

    if a == 0.0 {
        return solve_linear(b, c);
    }

    let disc = params.discriminant();
    let root = if disc.is_finite() {
        disc.sqrt()
    } else {
        scaled_discriminant_root(b, params.gravity_mps2, c)
    };
    if root.is_nan() || disc < 0.0 {
        return Err(SolverError::DegenerateInput { discriminant: disc });
    }

    let t1 = (-b + root) / (2.0 * a);
    let t2 = (-b - root) / (2.0 * a);
    let t = t1.max(t2).max(0.0);
    if !t.is_finite() {
        return Err(SolverError::Overflow {
            quantity: "landing time",
        });
    }
    Ok(FlightDuration::from_root(t))
}

// sqrt(b^2 + 2*g*y0) for inputs where squaring overflows. NaN if the
// discriminant is negative.
fn scaled_discriminant_root(b: f64, g: f64, y0: f64) -> f64 {
    let scale = b.abs().max(g.abs().sqrt() * y0.abs().sqrt());
    if scale == 0.0 || !scale.is_finite() {
        return f64::NAN;
    }
    let bs = b / scale;
    scale * (bs * bs + 2.0 * (g / scale) * (y0 / scale)).sqrt()
}

// Without gravity y(t) = c + b*t, so there is at most one crossing.
fn solve_linear(b: f64, c: f64) -> Result<FlightDuration, SolverError> {
    if b == 0.0 {
        return if c == 0.0 {
            Ok(FlightDuration::ZERO)
        } else {
            Err(SolverError::NeverLands {
                vertical_speed_mps: b,
                height_m: c,
            })
        };
    }

    let t = -c / b;
    if t >= 0.0 {
        Ok(FlightDuration::from_root(t))
    } else {
        Err(SolverError::NeverLands {
            vertical_speed_mps: b,
            height_m: c,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

/// Positions sampled evenly over the whole flight, one per animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    params: LaunchParameters,
    duration: FlightDuration,
    frame_rate_hz: f64,
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn parameters(&self) -> LaunchParameters {
        self.params
    }

    pub fn duration(&self) -> FlightDuration {
        self.duration
    }

    pub fn frame_rate_hz(&self) -> f64 {
        self.frame_rate_hz
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, frame: usize) -> Option<&TrajectorySample> {
        self.samples.get(frame)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }

    pub fn summary(&self) -> FlightSummary {
        FlightSummary::from_parameters(self.params, self.duration)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectorySample;
    type IntoIter = std::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// floor(frame_rate * duration), the number of frames the flight spans.
pub fn frame_count(duration: FlightDuration, frame_rate_hz: f64) -> Result<f64, SolverError> {
    if !frame_rate_hz.is_finite() || frame_rate_hz <= 0.0 {
        return Err(SolverError::InvalidFrameRate(frame_rate_hz));
    }
    Ok((frame_rate_hz * duration.seconds()).floor())
}

pub fn sample(params: LaunchParameters, frame_rate_hz: f64) -> Result<Trajectory, SolverError> {
    sample_with_limit(params, frame_rate_hz, DEFAULT_MAX_SAMPLES)
}

pub fn sample_with_limit(
    params: LaunchParameters,
    frame_rate_hz: f64,
    max_samples: usize,
) -> Result<Trajectory, SolverError> {
    let duration = solve(params)?;
    let (x_land, y_land) = params.position_at(duration.seconds());
    if !x_land.is_finite() || !y_land.is_finite() {
        return Err(SolverError::Overflow {
            quantity: "landing position",
        });
    }
    let requested = frame_count(duration, frame_rate_hz)?;
    if requested > max_samples as f64 {
        return Err(SolverError::TooManySamples {
            requested,
            limit: max_samples,
        });
    }

    let count = requested as usize;
    let samples = sample_times(duration.seconds(), count)
        .map(|time_s| {
            let (x_m, y_m) = params.position_at(time_s);
            TrajectorySample { time_s, x_m, y_m }
        })
        .collect();

    Ok(Trajectory {
        params,
        duration,
        frame_rate_hz,
        samples,
    })
}

// `count` evenly spaced times over [0, end], both ends included.
fn sample_times(end_s: f64, count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| {
        if i == 0 {
            0.0
        } else if i + 1 == count {
            end_s
        } else {
            (i as f64 * end_s) / (count - 1) as f64
        }
    })
}
