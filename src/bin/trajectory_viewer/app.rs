use macroquad::prelude::*;
use projectile_sim::config::SimulationConfig;
use projectile_sim::core::playback::Playback;
use projectile_sim::core::window::{PlotWindow, ScreenRect};

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN,
    MSAA_SAMPLES, PANEL_WIDTH, PANEL_X, RIGHT_MARGIN, STATUS_Y, TITLE_Y, TOP_MARGIN,
};
use crate::controls::{LaunchForm, draw_control_panel};
use crate::render::{draw_axis_tick_labels, draw_floor, draw_grid, draw_projectile, draw_tracer};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion Simulation".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn plot_rect() -> ScreenRect {
    ScreenRect {
        left: PANEL_X + PANEL_WIDTH + LEFT_MARGIN,
        right: screen_width() - RIGHT_MARGIN,
        top: TOP_MARGIN,
        bottom: screen_height() - BOTTOM_MARGIN,
    }
}

fn draw_title(status: &str, color: Color) {
    draw_text(
        "Projectile Motion Simulation",
        PANEL_X,
        TITLE_Y,
        30.0,
        Color::from_rgba(30, 30, 35, 255),
    );
    draw_text(status, PANEL_X, STATUS_Y, 20.0, color);
}

/// A solved launch and the axis limits it is drawn in.
struct Flight {
    playback: Playback,
    window: PlotWindow,
    announced: bool,
}

impl Flight {
    fn new(playback: Playback) -> Self {
        let window = PlotWindow::for_trajectory(playback.trajectory());
        Self {
            playback,
            window,
            announced: false,
        }
    }

    fn update(&mut self) {
        if is_key_pressed(KeyCode::R) {
            self.playback.restart();
            self.announced = false;
        }
        if is_key_pressed(KeyCode::Space) {
            self.playback.toggle_pause();
        }

        self.playback.advance(f64::from(get_frame_time()));
        if self.playback.is_finished() && !self.announced {
            tracing::info!(frames = self.playback.trajectory().len(), "animation complete");
            self.announced = true;
        }
    }

    /// Draws the plot and returns the status line.
    fn draw(&self, rect: ScreenRect) -> String {
        let playback = &self.playback;
        let trajectory = playback.trajectory();
        draw_grid(rect);
        draw_axis_tick_labels(rect, &self.window);
        draw_floor(rect, &self.window);
        draw_tracer(playback.trail(), rect, &self.window);

        match playback.current() {
            Some(sample) => {
                draw_projectile(sample.x_m, sample.y_m, rect, &self.window);
                let state = if playback.is_finished() {
                    "Animation complete (R to replay)"
                } else if playback.is_paused() {
                    "Paused (Space to resume)"
                } else {
                    "Space to pause, R to restart"
                };
                format!(
                    "t = {:.2} s   x = {:.2} m   y = {:.2} m   frame {}/{}   {state}",
                    sample.time_s,
                    sample.x_m,
                    sample.y_m,
                    playback.frame() + 1,
                    trajectory.len()
                )
            }
            None => {
                let params = trajectory.parameters();
                draw_projectile(params.x0_m, params.y0_m, rect, &self.window);
                "No frames to animate".to_string()
            }
        }
    }
}

/// Plays the configured launch and re-solves whenever the panel asks to,
/// until the window is closed.
pub(crate) async fn run(mut config: SimulationConfig) {
    let mut form = LaunchForm::from_inputs(&config.launch);
    let mut flight = form.start(&mut config).map(Flight::new);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if let Ok(flight) = flight.as_mut() {
            flight.update();
        }

        clear_background(BACKGROUND);
        match &flight {
            Ok(flight) => {
                let status = flight.draw(plot_rect());
                draw_title(&status, DARKGRAY);
            }
            Err(_) => draw_title("No valid trajectory for these inputs", MAROON),
        }

        let error = flight.as_ref().err().map(String::as_str);
        if draw_control_panel(&mut form, error) {
            flight = form.start(&mut config).map(Flight::new);
        }

        next_frame().await;
    }
}
