//! Checkerboard dither painting.
//!
//! Selections, hover states, and window shadows are drawn as dither
//! patterns rather than translucent fills, so the content underneath
//! stays visible on a two-color display.

use egui::{Color32, Painter, Pos2, Rect};

/// Draw a checkerboard dither over a rectangle. `density` controls
/// spacing: 1 = every other pixel, 2 = sparser.
///
/// Bounds are clamped inward once so the inner loop needs no per-pixel
/// bounds check.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let density = density.max(1) as i32;

    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;

    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let y_step = if density == 1 { 1 } else { density };
    let x_step = if density == 1 { 2 } else { density * 2 };
    let pixel = egui::Vec2::splat(1.0);

    let mut y = y0;
    while y < y1 {
        let row_offset = if density == 1 {
            if (y - y0) % 2 == 0 { 0 } else { 1 }
        } else if ((y - y0) / density) % 2 == 0 {
            0
        } else {
            density
        };

        let mut x = x0 + row_offset;
        while x < x1 {
            painter.rect_filled(
                Rect::from_min_size(Pos2::new(x as f32, y as f32), pixel),
                0.0,
                color,
            );
            x += x_step;
        }
        y += y_step;
    }
}

/// Tight 1px checkerboard for pressed/selected states.
pub fn draw_dither_selection(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 1);
}

/// Sparser pattern for hover states.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 2);
}

/// Dithered drop shadow behind a floating window. Call after
/// `egui::Window::show()` with the window rect.
pub fn draw_window_shadow(ctx: &egui::Context, window_rect: Rect) {
    let shadow_rect = Rect::from_min_max(
        Pos2::new(window_rect.min.x + 4.0, window_rect.min.y + 4.0),
        Pos2::new(window_rect.max.x + 4.0, window_rect.max.y + 4.0),
    );
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("dither_shadows"),
    ));
    draw_dither_rect(&painter, shadow_rect, Color32::BLACK, 2);
}
