//! Widgets for ink applications.

use egui::{Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget};

use crate::dither;
use crate::theme::InkColors;

/// Action reported by the window control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    None,
    Close,
    Minimize,
}

/// A 14px framed button; `glyph` paints its face.
fn control_button(ui: &mut Ui, glyph: impl FnOnce(&egui::Painter, Rect)) -> Response {
    let (rect, resp) = ui.allocate_exact_size(Vec2::splat(14.0), Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, InkColors::WHITE);
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, InkColors::BLACK));
        if resp.hovered() {
            dither::hover_overlay(painter, rect);
        }
        glyph(painter, rect);
    }
    resp
}

/// Close and minimize buttons at the left edge of the menu bar.
/// Call at the start of your `menu_bar` closure; returns what was clicked.
pub fn window_control_buttons(ui: &mut Ui) -> WindowAction {
    let stroke = Stroke::new(1.0, InkColors::BLACK);
    let m = 3.0;

    let close = control_button(ui, |painter, rect| {
        painter.line_segment(
            [rect.left_top() + Vec2::splat(m), rect.right_bottom() - Vec2::splat(m)],
            stroke,
        );
        painter.line_segment(
            [rect.right_top() + Vec2::new(-m, m), rect.left_bottom() + Vec2::new(m, -m)],
            stroke,
        );
    });

    ui.add_space(2.0);

    let minimize = control_button(ui, |painter, rect| {
        painter.line_segment(
            [
                Pos2::new(rect.left() + m, rect.center().y),
                Pos2::new(rect.right() - m, rect.center().y),
            ],
            stroke,
        );
    });

    ui.add_space(4.0);

    // Thin vertical separator after the buttons
    let (sep, _) = ui.allocate_exact_size(Vec2::new(4.0, 14.0), Sense::hover());
    if ui.is_rect_visible(sep) {
        ui.painter().vline(sep.center().x, sep.y_range(), stroke);
    }

    ui.add_space(4.0);

    if close.clicked() {
        WindowAction::Close
    } else if minimize.clicked() {
        WindowAction::Minimize
    } else {
        WindowAction::None
    }
}

/// A fixed-size keypad button: white face, 1px outline, dither feedback.
/// The label inverts to white while the button is held down.
pub struct KeyButton<'a> {
    label: &'a str,
    size: Vec2,
    font_size: f32,
}

impl<'a> KeyButton<'a> {
    pub fn new(label: &'a str, size: Vec2) -> Self {
        Self {
            label,
            size,
            font_size: 16.0,
        }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Widget for KeyButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            painter.rect_filled(rect, 0.0, InkColors::WHITE);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, InkColors::BLACK));

            let pressed = response.is_pointer_button_down_on();
            if pressed {
                dither::press_overlay(painter, rect);
            } else if response.hovered() {
                dither::hover_overlay(painter, rect);
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                if pressed { InkColors::WHITE } else { InkColors::BLACK },
            );
        }

        response
    }
}

/// Status bar strip: white fill, 1px black outline.
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(InkColors::WHITE)
        .stroke(Stroke::new(1.0, InkColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}
