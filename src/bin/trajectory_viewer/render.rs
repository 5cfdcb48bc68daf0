use macroquad::prelude::*;
use projectile_sim::core::ballistics::TrajectorySample;
use projectile_sim::core::window::{PlotWindow, ScreenRect};

use crate::constants::{
    FLOOR_COLOR, FLOOR_DASH_PX, GRID_COLOR, LABEL_COLOR, PROJECTILE_COLOR, PROJECTILE_RADIUS,
    TRACER_COLOR, X_GRID_LINES, Y_GRID_LINES,
};

fn format_axis_value(value: f64, axis_span: f64) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_grid(rect: ScreenRect) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = rect.left + t * (rect.right - rect.left);
        draw_line(x, rect.top, x, rect.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = rect.bottom - t * (rect.bottom - rect.top);
        draw_line(rect.left, y, rect.right, y, 1.0, GRID_COLOR);
    }
    draw_line(rect.left, rect.bottom, rect.right, rect.bottom, 2.0, DARKGRAY);
    draw_line(rect.left, rect.top, rect.left, rect.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(rect: ScreenRect, window: &PlotWindow) {
    let tick_font_size = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f64 / X_GRID_LINES as f64;
        let value = window.x_min + t * window.width();
        let label = format_axis_value(value, window.width());
        let size = measure_text(&label, None, tick_font_size, 1.0);
        let (x, _) = window.to_screen(value, window.y_min, rect);
        draw_text(
            &label,
            x - (size.width * 0.5),
            rect.bottom + 22.0,
            tick_font_size as f32,
            LABEL_COLOR,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f64 / Y_GRID_LINES as f64;
        let value = window.y_min + t * window.height();
        let label = format_axis_value(value, window.height());
        let size = measure_text(&label, None, tick_font_size, 1.0);
        let (_, y) = window.to_screen(window.x_min, value, rect);
        draw_text(
            &label,
            (rect.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size as f32,
            LABEL_COLOR,
        );
    }

    draw_text(
        "Horizontal position (m)",
        rect.right - 200.0,
        rect.bottom + 48.0,
        18.0,
        LABEL_COLOR,
    );
    draw_text(
        "Vertical position (m)",
        rect.left + 10.0,
        rect.top - 8.0,
        18.0,
        LABEL_COLOR,
    );
}

/// Dashed line at y = 0.
pub(crate) fn draw_floor(rect: ScreenRect, window: &PlotWindow) {
    let (_, y) = window.to_screen(window.x_min, 0.0, rect);
    let mut x = rect.left;
    while x < rect.right {
        let end = (x + FLOOR_DASH_PX).min(rect.right);
        draw_line(x, y, end, y, 1.5, FLOOR_COLOR);
        x += FLOOR_DASH_PX * 2.0;
    }
}

pub(crate) fn draw_tracer(trail: &[TrajectorySample], rect: ScreenRect, window: &PlotWindow) {
    for pair in trail.windows(2) {
        let (x1, y1) = window.to_screen(pair[0].x_m, pair[0].y_m, rect);
        let (x2, y2) = window.to_screen(pair[1].x_m, pair[1].y_m, rect);
        draw_line(x1, y1, x2, y2, 2.5, TRACER_COLOR);
    }
}

pub(crate) fn draw_projectile(x_m: f64, y_m: f64, rect: ScreenRect, window: &PlotWindow) {
    let (x, y) = window.to_screen(x_m, y_m, rect);
    draw_circle(x, y, PROJECTILE_RADIUS, PROJECTILE_COLOR);
    draw_circle_lines(x, y, PROJECTILE_RADIUS, 2.0, DARKBLUE);
}
