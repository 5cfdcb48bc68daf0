use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use projectile_sim::config::{LaunchInputs, SimulationConfig};
use projectile_sim::core::playback::Playback;
use projectile_sim::simulation;

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH, PANEL_X, TOP_MARGIN};

/// Launch values bound to the panel sliders, which edit `f32`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LaunchForm {
    pub(crate) x0_m: f32,
    pub(crate) y0_m: f32,
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) gravity_mps2: f32,
}

impl LaunchForm {
    pub(crate) fn from_inputs(inputs: &LaunchInputs) -> Self {
        Self {
            x0_m: inputs.x0_m as f32,
            y0_m: inputs.y0_m as f32,
            speed_mps: inputs.speed_mps as f32,
            angle_deg: inputs.angle_deg as f32,
            gravity_mps2: inputs.gravity_mps2 as f32,
        }
    }

    pub(crate) fn to_inputs(self) -> LaunchInputs {
        LaunchInputs {
            x0_m: f64::from(self.x0_m),
            y0_m: f64::from(self.y0_m),
            speed_mps: f64::from(self.speed_mps),
            angle_deg: f64::from(self.angle_deg),
            gravity_mps2: f64::from(self.gravity_mps2),
        }
    }

    /// Writes the form into `config` and solves it again. Sampling settings are kept.
    pub(crate) fn start(self, config: &mut SimulationConfig) -> Result<Playback, String> {
        config.launch = self.to_inputs();
        simulation::run(config)
            .map(Playback::new)
            .map_err(|err| err.to_string())
    }
}

/// Draws the launch panel. Returns true when "Start simulation" was clicked.
pub(crate) fn draw_control_panel(form: &mut LaunchForm, error: Option<&str>) -> bool {
    let mut start = false;
    widgets::Window::new(
        hash!(),
        vec2(PANEL_X, TOP_MARGIN),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Launch")
    .ui(&mut *root_ui(), |ui| {
        ui.slider(hash!(), "x0 (m)", -100.0..100.0, &mut form.x0_m);
        ui.slider(hash!(), "y0 (m)", 0.0..500.0, &mut form.y0_m);
        ui.slider(hash!(), "Speed (m/s)", 0.0..100.0, &mut form.speed_mps);
        ui.slider(hash!(), "Angle (deg)", 0.0..360.0, &mut form.angle_deg);
        ui.slider(hash!(), "g (m/s^2)", 0.0..360.0, &mut form.gravity_mps2);
        ui.separator();
        if ui.button(None, "Start simulation") {
            start = true;
        }
        if let Some(message) = error {
            ui.separator();
            ui.label(None, "No valid trajectory for these inputs");
            for line in message.split(": ") {
                ui.label(None, line);
            }
        }
    });

    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_replaces_launch_and_keeps_sampling() {
        let mut config = SimulationConfig::default();
        config.sampling.frame_rate_hz = 10.0;
        let mut form = LaunchForm::from_inputs(&config.launch);
        form.y0_m = 0.0;
        form.speed_mps = 20.0;
        form.angle_deg = 90.0;
        form.gravity_mps2 = 10.0;

        let playback = form.start(&mut config).unwrap();

        assert_eq!(config.launch.speed_mps, 20.0);
        assert_eq!(config.sampling.frame_rate_hz, 10.0);
        assert_eq!(playback.trajectory().len(), 40);
        assert_eq!(playback.frame(), 0);
    }

    #[test]
    fn degenerate_launch_reports_message() {
        let mut config = SimulationConfig::default();
        let mut form = LaunchForm::from_inputs(&config.launch);
        form.gravity_mps2 = -9.8;

        let message = form.start(&mut config).unwrap_err();

        assert!(message.contains("no real landing time"), "{message}");
    }
}
