//! inkCalc application.

use egui::{Context, Key, Vec2};
use inkcore::repaint::RepaintController;
use inkcore::theme::{menu_bar, strip_special_keys, InkColors};
use inkcore::widgets::{status_bar, window_control_buttons, KeyButton, WindowAction};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::{format_value, BinOp, CalcEvent, CalcState};

/// Persisted preferences. The memory register is the only thing the
/// calculator remembers between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct Preferences {
    memory: f64,
}

pub struct CalcApp {
    state: CalcState,
    memory: f64,
    show_about: bool,
    prefs_path: PathBuf,
    repaint: RepaintController,
}

impl CalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let prefs_path = inkcore::storage::config_dir("inkcalc").join("preferences.json");
        let prefs: Preferences = inkcore::storage::load_json(&prefs_path).unwrap_or_default();
        Self {
            state: CalcState::default(),
            memory: prefs.memory,
            show_about: false,
            prefs_path,
            repaint: RepaintController::new(),
        }
    }

    fn dispatch(&mut self, event: CalcEvent) {
        self.state = self.state.apply(event);
        self.repaint.mark_needs_repaint();
    }

    fn set_memory(&mut self, value: f64) {
        self.memory = value;
        let prefs = Preferences { memory: self.memory };
        if let Err(err) = inkcore::storage::save_json(&self.prefs_path, &prefs) {
            eprintln!("[inkcalc] could not save preferences: {err}");
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        strip_special_keys(ctx);

        let mut events = Vec::new();
        ctx.input(|i| {
            if !i.modifiers.shift {
                for d in 0..=9u8 {
                    if i.key_pressed(digit_key(d)) {
                        events.push(CalcEvent::Digit(d));
                    }
                }
            }

            if i.key_pressed(Key::Plus) || (i.modifiers.shift && i.key_pressed(Key::Equals)) {
                events.push(CalcEvent::Operator(BinOp::Add));
            }
            if i.key_pressed(Key::Minus) {
                events.push(CalcEvent::Operator(BinOp::Subtract));
            }
            if i.modifiers.shift && i.key_pressed(Key::Num8) {
                events.push(CalcEvent::Operator(BinOp::Multiply));
            }
            if i.key_pressed(Key::Slash) {
                events.push(CalcEvent::Operator(BinOp::Divide));
            }

            if i.key_pressed(Key::Period) {
                events.push(CalcEvent::DecimalPoint);
            }

            if i.key_pressed(Key::Enter) || (!i.modifiers.shift && i.key_pressed(Key::Equals)) {
                events.push(CalcEvent::Equals);
            }

            if i.key_pressed(Key::Escape) || i.key_pressed(Key::C) {
                events.push(CalcEvent::Clear);
            }
            if i.key_pressed(Key::Backspace) {
                events.push(CalcEvent::Backspace);
            }
        });

        for event in events {
            self.dispatch(event);
        }
    }

    fn render_menu(&mut self, ctx: &Context) {
        let action = egui::TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| {
                menu_bar(ui, |ui| {
                    let action = window_control_buttons(ui);
                    ui.menu_button("memory", |ui| {
                        if ui.button("MC (clear)").clicked() {
                            self.set_memory(0.0);
                            ui.close_menu();
                        }
                        if ui.button("MR (recall)").clicked() {
                            self.state = self.state.with_entry(self.memory);
                            self.repaint.mark_needs_repaint();
                            ui.close_menu();
                        }
                        if ui.button("M+ (add)").clicked() {
                            if let Some(val) = self.state.entry() {
                                self.set_memory(self.memory + val);
                            }
                            ui.close_menu();
                        }
                        if ui.button("M- (subtract)").clicked() {
                            if let Some(val) = self.state.entry() {
                                self.set_memory(self.memory - val);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.menu_button("help", |ui| {
                        if ui.button("about").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                    });
                    action
                })
                .inner
            })
            .inner;

        match action {
            WindowAction::Close => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            WindowAction::Minimize => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
            }
            WindowAction::None => {}
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let display_height = 48.0;
        egui::Frame::none()
            .fill(InkColors::WHITE)
            .stroke(egui::Stroke::new(1.0, InkColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.set_min_height(display_height);
                ui.set_max_height(display_height);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.state.display())
                            .font(egui::FontId::monospace(26.0))
                            .strong(),
                    );
                });
            });
    }

    fn key(&self, ui: &mut egui::Ui, label: &str, size: Vec2) -> bool {
        ui.add(KeyButton::new(label, size)).clicked()
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let gap = ui.spacing().item_spacing.x;
        let btn = Vec2::new((ui.available_width() - gap * 3.0) / 4.0, 38.0);
        let wide = Vec2::new(btn.x * 2.0 + gap, btn.y);

        ui.horizontal(|ui| {
            if self.key(ui, "C", btn) { self.dispatch(CalcEvent::Clear); }
            if self.key(ui, "←", btn) { self.dispatch(CalcEvent::Backspace); }
            if self.key(ui, "/", btn) { self.dispatch(CalcEvent::Operator(BinOp::Divide)); }
            if self.key(ui, "*", btn) { self.dispatch(CalcEvent::Operator(BinOp::Multiply)); }
        });

        ui.horizontal(|ui| {
            if self.key(ui, "7", btn) { self.dispatch(CalcEvent::Digit(7)); }
            if self.key(ui, "8", btn) { self.dispatch(CalcEvent::Digit(8)); }
            if self.key(ui, "9", btn) { self.dispatch(CalcEvent::Digit(9)); }
            if self.key(ui, "-", btn) { self.dispatch(CalcEvent::Operator(BinOp::Subtract)); }
        });

        ui.horizontal(|ui| {
            if self.key(ui, "4", btn) { self.dispatch(CalcEvent::Digit(4)); }
            if self.key(ui, "5", btn) { self.dispatch(CalcEvent::Digit(5)); }
            if self.key(ui, "6", btn) { self.dispatch(CalcEvent::Digit(6)); }
            if self.key(ui, "+", btn) { self.dispatch(CalcEvent::Operator(BinOp::Add)); }
        });

        ui.horizontal(|ui| {
            if self.key(ui, "1", btn) { self.dispatch(CalcEvent::Digit(1)); }
            if self.key(ui, "2", btn) { self.dispatch(CalcEvent::Digit(2)); }
            if self.key(ui, "3", btn) { self.dispatch(CalcEvent::Digit(3)); }
            if self.key(ui, "=", btn) { self.dispatch(CalcEvent::Equals); }
        });

        // wide zero, like a desk calculator
        ui.horizontal(|ui| {
            if self.key(ui, "0", wide) { self.dispatch(CalcEvent::Digit(0)); }
            if self.key(ui, ".", btn) { self.dispatch(CalcEvent::DecimalPoint); }
            if self.key(ui, "=", btn) { self.dispatch(CalcEvent::Equals); }
        });
    }

    fn render_status(&self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let text = match self.state.pending() {
                Some(op) => format!("{} {}", format_value(self.state.stored()), op.symbol()),
                None => "keys: 0-9  + - * /  enter  esc".to_string(),
            };
            status_bar(ui, &text);
        });
    }

    fn render_about(&mut self, ctx: &Context) {
        if !self.show_about {
            return;
        }
        let screen = ctx.screen_rect();
        let max_h = (screen.height() - 40.0).max(120.0);
        let resp = egui::Window::new("about inkCalc")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .max_height(max_h)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading("inkCalc");
                    ui.label("version 0.1.0");
                    ui.add_space(8.0);
                    ui.label("a pocket calculator in ink");
                    ui.add_space(4.0);
                    ui.label("keys: 0-9 +-*/ Enter Esc");
                    ui.add_space(12.0);
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                    ui.add_space(4.0);
                });
            });
        if let Some(r) = &resp {
            inkcore::dither::window_shadow(ctx, r.response.rect);
        }
    }
}

impl eframe::App for CalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.handle_keys(ctx);

        self.render_menu(ctx);
        self.render_status(ctx);

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(InkColors::WHITE)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);
            });

        self.render_about(ctx);
        self.repaint.end_frame(ctx);
    }
}

fn digit_key(d: u8) -> Key {
    match d {
        0 => Key::Num0,
        1 => Key::Num1,
        2 => Key::Num2,
        3 => Key::Num3,
        4 => Key::Num4,
        5 => Key::Num5,
        6 => Key::Num6,
        7 => Key::Num7,
        8 => Key::Num8,
        _ => Key::Num9,
    }
}
