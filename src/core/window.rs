use super::ballistics::Trajectory;

pub const X_PADDING_M: f64 = 10.0;
pub const Y_PADDING_M: f64 = 10.0;
pub const BELOW_GROUND_M: f64 = 10.0;

/// Data-space axis limits for drawing a trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Pixel rectangle a plot window is mapped onto (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PlotWindow {
    /// Fits the whole flight with padding right and above, and room below ground.
    pub fn for_trajectory(trajectory: &Trajectory) -> Self {
        let params = trajectory.parameters();
        let mut samples = trajectory.iter();
        let Some(first) = samples.next() else {
            return Self::around_point(params.x0_m, params.y0_m);
        };

        let (x_lo, x_hi, y_hi) = samples.fold(
            (first.x_m, first.x_m, first.y_m),
            |(x_lo, x_hi, y_hi), s| (x_lo.min(s.x_m), x_hi.max(s.x_m), y_hi.max(s.y_m)),
        );

        Self {
            x_min: x_lo,
            x_max: x_hi + X_PADDING_M,
            y_min: -BELOW_GROUND_M,
            y_max: y_hi + Y_PADDING_M,
        }
    }

    pub fn around_point(x_m: f64, y_m: f64) -> Self {
        Self {
            x_min: x_m,
            x_max: x_m + X_PADDING_M,
            y_min: -BELOW_GROUND_M,
            y_max: y_m.max(0.0) + Y_PADDING_M,
        }
    }

    pub fn width(&self) -> f64 {
        (self.x_max - self.x_min).max(f64::EPSILON)
    }

    pub fn height(&self) -> f64 {
        (self.y_max - self.y_min).max(f64::EPSILON)
    }

    pub fn to_screen(&self, x_m: f64, y_m: f64, rect: ScreenRect) -> (f32, f32) {
        let plot_w = (rect.right - rect.left).max(1.0);
        let plot_h = (rect.bottom - rect.top).max(1.0);
        let tx = ((x_m - self.x_min) / self.width()) as f32;
        let ty = ((y_m - self.y_min) / self.height()) as f32;
        (rect.left + tx * plot_w, rect.bottom - ty * plot_h)
    }
}
