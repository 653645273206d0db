//! Checkerboard dither overlays.
//!
//! Grey does not exist on a two-color surface. A tight checkerboard reads
//! as "pressed", a sparser grid as "hover", and an offset grid behind a
//! floating window as its shadow.

use egui::{Painter, Pos2, Rect, Vec2};

use crate::theme::InkColors;

/// Paint a black checkerboard of 1px dots over `rect`.
///
/// `step` is the dot spacing: 1 gives the tight press pattern, 2 the
/// lighter hover pattern. Bounds are clamped inward once up front so the
/// loop never paints outside `rect`.
pub fn dither_rect(painter: &Painter, rect: Rect, step: i32) {
    let step = step.max(1);

    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let dot = Vec2::splat(1.0);
    let mut y = y0;
    let mut row = 0;
    while y < y1 {
        // Odd rows shift by one step so the dots interleave.
        let mut x = x0 + (row % 2) * step;
        while x < x1 {
            painter.rect_filled(
                Rect::from_min_size(Pos2::new(x as f32, y as f32), dot),
                0.0,
                InkColors::BLACK,
            );
            x += step * 2;
        }
        y += step;
        row += 1;
    }
}

/// Tight checkerboard for pressed and selected widgets.
pub fn press_overlay(painter: &Painter, rect: Rect) {
    dither_rect(painter, rect, 1);
}

/// Sparse checkerboard for hover feedback.
pub fn hover_overlay(painter: &Painter, rect: Rect) {
    dither_rect(painter, rect, 2);
}

/// Dithered drop shadow for a floating window.
/// Call after `egui::Window::show()` with the window rect; the shadow is
/// painted on its own layer so it renders beneath the window content.
pub fn window_shadow(ctx: &egui::Context, window_rect: Rect) {
    let shadow = window_rect.translate(Vec2::splat(4.0));
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("ink_window_shadow"),
    ));
    dither_rect(&painter, shadow, 2);
}
