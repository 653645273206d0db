//! Ink theme: two colors, 1px strokes, zero rounding.
//!
//! White panels with black outlines, like print on paper. Widgets that
//! paint themselves (keypad buttons, dither overlays) use the same palette.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Only two colors exist on an ink display.
pub struct InkColors;

impl InkColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for ink applications.
pub struct InkTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for InkTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl InkTheme {
    /// Apply the ink theme to an egui context.
    ///
    /// Text styles use egui's bundled fonts; only the sizes and the
    /// black-and-white visuals are ours.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = InkColors::WHITE;
        visuals.panel_fill = InkColors::WHITE;
        visuals.faint_bg_color = InkColors::WHITE;
        visuals.extreme_bg_color = InkColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, InkColors::BLACK);

        let flat = |w: &mut egui::style::WidgetVisuals| {
            w.bg_fill = InkColors::WHITE;
            w.bg_stroke = Stroke::new(1.0, InkColors::BLACK);
            w.fg_stroke = Stroke::new(1.0, InkColors::BLACK);
            w.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        flat(&mut visuals.widgets.open);

        // Shadows are drawn as dither patterns, never alpha blurs.
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = Color32::from_rgb(160, 160, 160);
        visuals.selection.stroke = Stroke::new(1.0, InkColors::BLACK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar strip: white fill, 1px black outline.
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(InkColors::WHITE)
        .stroke(Stroke::new(1.0, InkColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Strip Tab and zoom chords from this frame's input.
///
/// Tab would cycle focus onto buttons (and Enter would then press them);
/// ctrl/cmd +/- would rescale the whole UI. Call at the top of `update()`.
///
/// egui applies Tab focus cycling in `begin_frame()`, before `update()`
/// runs, so stripping the event is not enough: any focus change it caused
/// is also reverted here.
pub fn strip_special_keys(ctx: &egui::Context) {
    let focused_before = ctx.memory(|m| m.focused());
    let mut tab_seen = false;

    ctx.input_mut(|i| {
        i.events.retain(|e| match e {
            egui::Event::Key { key: egui::Key::Tab, .. } => {
                tab_seen = true;
                false
            }
            egui::Event::Text(t) if t.contains('\t') => false,
            egui::Event::Key { key, modifiers, .. } => {
                !(modifiers.command
                    && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
            }
            _ => true,
        });
    });

    if tab_seen {
        if let Some(id) = focused_before {
            ctx.memory_mut(|m| m.request_focus(id));
        } else if let Some(id) = ctx.memory(|m| m.focused()) {
            ctx.memory_mut(|m| m.surrender_focus(id));
        }
    }
}
