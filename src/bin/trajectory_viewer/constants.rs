use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 800;
pub const MSAA_SAMPLES: i32 = 4;

pub const LEFT_MARGIN: f32 = 90.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 110.0;
pub const BOTTOM_MARGIN: f32 = 80.0;

pub const PANEL_X: f32 = 18.0;
pub const PANEL_WIDTH: f32 = 320.0;
pub const PANEL_HEIGHT: f32 = 330.0;

pub const TITLE_Y: f32 = 44.0;
pub const STATUS_Y: f32 = 78.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const BACKGROUND: Color = Color::new(0.98, 0.98, 0.99, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.90, 0.93, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.44, 0.49, 1.0);
pub const TRACER_COLOR: Color = Color::new(0.86, 0.16, 0.16, 1.0);
pub const PROJECTILE_COLOR: Color = Color::new(0.12, 0.35, 0.90, 1.0);
pub const FLOOR_COLOR: Color = Color::new(0.55, 0.55, 0.58, 1.0);

pub const PROJECTILE_RADIUS: f32 = 7.0;
pub const FLOOR_DASH_PX: f32 = 10.0;
