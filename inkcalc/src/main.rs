//! inkCalc - a pocket calculator in ink
//!
//! Four operations, a decimal point, backspace, and a memory register.

mod app;
mod engine;

use app::CalcApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([272.0, 380.0])
            .with_resizable(false)
            .with_title("inkCalc"),
        ..Default::default()
    };

    eframe::run_native(
        "inkCalc",
        options,
        Box::new(|cc| {
            inkcore::InkTheme::default().apply(&cc.egui_ctx);
            Box::new(CalcApp::new(cc))
        }),
    )
}
