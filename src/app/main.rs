/**
 * MediLabo Desk - Main Entry Point
 *
 * Native desktop client for the MediLabo clinical record service.
 * Builds the eframe window and drives the per-frame state polling.
 */
use eframe::egui;
use medilabo_desk::app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "MediLabo",
        options,
        Box::new(|_cc| Ok(Box::new(MediLaboApp::default()))),
    )
}

/// Main application state
#[derive(Default)]
struct MediLaboApp {
    state: AppState,
}

impl eframe::App for MediLaboApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_pending();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_toasts(ctx, &self.state);

        ctx.request_repaint();
    }
}
