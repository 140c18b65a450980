//! cubetimer — a speedcube solve timer
//!
//! Stopwatch, random scrambles, and an append-only CSV solve log.

mod app;
mod dither;
mod repaint;
mod theme;
mod widgets;

use app::CubeTimerApp;
use eframe::NativeOptions;
use theme::TimerTheme;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 320.0])
            .with_title("cubetimer"),
        ..Default::default()
    };

    eframe::run_native(
        "cubetimer",
        options,
        Box::new(|cc| {
            TimerTheme::default().apply(&cc.egui_ctx);
            Box::new(CubeTimerApp::new(cc))
        }),
    )
}
