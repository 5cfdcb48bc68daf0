use serde::Serialize;

use super::ballistics::{FlightDuration, LaunchParameters};

/// Headline numbers for a flight, computed in closed form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FlightSummary {
    pub duration_s: f64,
    pub range_m: f64,
    pub distance_m: f64,
    pub apex_time_s: f64,
    pub apex_height_m: f64,
    pub impact_speed_mps: f64,
}

impl FlightSummary {
    pub fn from_parameters(params: LaunchParameters, duration: FlightDuration) -> Self {
        let t_land = duration.seconds();
        let (vx, vy) = params.velocity_components();
        let (range_m, _) = params.position_at(t_land);

        let apex_time_s = apex_time(params, t_land);
        let (_, apex_height_m) = params.position_at(apex_time_s);

        let vy_land = vy - params.gravity_mps2 * t_land;

        Self {
            duration_s: t_land,
            range_m,
            distance_m: (range_m - params.x0_m).abs(),
            apex_time_s,
            apex_height_m,
            impact_speed_mps: vx.hypot(vy_land),
        }
    }
}

// Vertical speed hits zero at vy/g; outside the flight the highest point is an endpoint.
fn apex_time(params: LaunchParameters, t_land: f64) -> f64 {
    let (_, vy) = params.velocity_components();
    if params.gravity_mps2 > 0.0 {
        return (vy / params.gravity_mps2).clamp(0.0, t_land);
    }

    let (_, y_end) = params.position_at(t_land);
    if y_end > params.y0_m { t_land } else { 0.0 }
}
