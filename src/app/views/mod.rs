use eframe::egui;

use crate::app::state::{AppState, Screen};
use crate::app::theme::colors;
use crate::app::toast::ToastKind;
use crate::app::{notes, patients};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("🏥 MediLabo").size(18.0).strong(),
                );
                ui.add_space(16.0);

                if ui.button("Home").clicked() {
                    state.go_home();
                }
                if ui.button("Patients").clicked() {
                    state.go_patients();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    if state.patients.is_busy() || state.notes.is_busy() {
                        ui.spinner();
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    // The notes screen is only reachable from a patient row; without a
    // subject it falls back to the grid.
    if state.screen == Screen::Notes && state.notes.subject.is_none() {
        state.screen = Screen::Patients;
    }

    let frame = egui::Frame::default()
        .fill(colors::PANEL_BG)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.screen {
            Screen::Home => render_home(ui),
            Screen::Patients => patients::view::render(ui, state),
            Screen::Notes => notes::view::render(ui, state),
        });
}

fn render_home(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(
            egui::RichText::new("MediLabo")
                .size(32.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.add_space(12.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            "Patient records, diagnostic notes, and diabetes risk assessment.",
        );
        ui.add_space(8.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            "Open the Patients screen to browse and edit records.",
        );
    });
}

pub fn render_toasts(ctx: &egui::Context, state: &AppState) {
    if state.toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in state.toasts.iter() {
                let fill = match toast.kind {
                    ToastKind::Success => colors::SUCCESS,
                    ToastKind::Error => colors::ERROR,
                };
                egui::Frame::default()
                    .fill(fill)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::symmetric(10, 6))
                    .show(ui, |ui| {
                        ui.colored_label(colors::TEXT_LIGHT, &toast.text);
                    });
                ui.add_space(6.0);
            }
        });
}
