//! Notes View
//!
//! Read-only note cards for the selected patient, the risk chip, and
//! the create/edit/delete dialogs.

use eframe::egui;

use crate::app::format::humanize;
use crate::app::state::{AppState, Screen};
use crate::app::theme::{colors, risk_color};
use crate::shared::{NoteRecord, RiskLevel};

enum CardAction {
    Edit(NoteRecord),
    Delete(String),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(subject) = state.notes.subject.clone() else {
        // No patient selected; the screen only makes sense from a row.
        state.screen = Screen::Patients;
        return;
    };
    let busy = state.notes.is_busy();

    ui.horizontal(|ui| {
        ui.heading(format!(
            "Notes for {} {}",
            subject.last_name, subject.first_name
        ));
        risk_chip(ui, state.notes.risk);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(!busy, egui::Button::new("➕ Add a note"))
                .clicked()
            {
                state.notes.open_create();
            }
            if state.notes.is_loading {
                ui.spinner();
            }
        });
    });
    ui.add_space(8.0);

    let mut actions: Vec<CardAction> = Vec::new();

    egui::ScrollArea::vertical().show(ui, |ui| {
        if state.notes.notes.is_empty() && !state.notes.is_loading {
            ui.colored_label(colors::TEXT_SECONDARY, "No notes found.");
        }
        ui.horizontal_wrapped(|ui| {
            for note in &state.notes.notes {
                note_card(ui, note, busy, &mut actions);
            }
        });
    });

    for action in actions {
        match action {
            CardAction::Edit(note) => state.notes.open_edit(&note),
            CardAction::Delete(id) => state.notes.request_delete(id),
        }
    }

    render_create_dialog(ui.ctx(), state);
    render_edit_dialog(ui.ctx(), state);
    render_delete_dialog(ui.ctx(), state);
}

fn risk_chip(ui: &mut egui::Ui, level: RiskLevel) {
    egui::Frame::default()
        .fill(risk_color(level))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.colored_label(colors::TEXT_LIGHT, level.label());
        });
}

fn note_card(ui: &mut egui::Ui, note: &NoteRecord, busy: bool, actions: &mut Vec<CardAction>) {
    egui::Frame::default()
        .fill(colors::CARD_BG)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(260.0);
            ui.vertical(|ui| {
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    format!(
                        "Created {} • Modified {}",
                        humanize(note.created_at),
                        humanize(note.updated_at)
                    ),
                );
                ui.add_space(4.0);
                ui.label(&note.note);
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.add_enabled(!busy, egui::Button::new("Edit")).clicked() {
                        actions.push(CardAction::Edit(note.clone()));
                    }
                    let delete = egui::Button::new(
                        egui::RichText::new("Delete").color(colors::ERROR),
                    );
                    if ui.add_enabled(!busy, delete).clicked() {
                        actions.push(CardAction::Delete(note.id.clone()));
                    }
                });
            });
        });
}

fn render_create_dialog(ctx: &egui::Context, state: &mut AppState) {
    if !state.notes.create_open {
        return;
    }

    let mut save = false;
    let mut cancel = false;
    egui::Window::new("Create a note")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut state.notes.create_content)
                    .hint_text("Note content")
                    .desired_rows(4)
                    .desired_width(360.0),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                let can_save = state.notes.can_submit_create();
                if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                    save = true;
                }
            });
        });

    if cancel {
        state.notes.close_create();
    }
    if save {
        let config = state.config.clone();
        state.notes.submit_create(&config);
    }
}

fn render_edit_dialog(ctx: &egui::Context, state: &mut AppState) {
    if state.notes.edit_target.is_none() {
        return;
    }

    let mut save = false;
    let mut cancel = false;
    egui::Window::new("Edit note")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut state.notes.edit_content)
                    .hint_text("Note content")
                    .desired_rows(4)
                    .desired_width(360.0),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                let can_save = state.notes.can_submit_edit();
                if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                    save = true;
                }
            });
        });

    if cancel {
        state.notes.close_edit();
    }
    if save {
        let config = state.config.clone();
        state.notes.submit_edit(&config);
    }
}

fn render_delete_dialog(ctx: &egui::Context, state: &mut AppState) {
    if state.notes.delete_target.is_none() {
        return;
    }

    let mut confirm = false;
    let mut cancel = false;
    egui::Window::new("Delete note")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Delete this note? This action cannot be undone.");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                if ui
                    .button(egui::RichText::new("Delete").color(colors::ERROR))
                    .clicked()
                {
                    confirm = true;
                }
            });
        });

    if cancel {
        state.notes.cancel_delete();
    }
    if confirm {
        let config = state.config.clone();
        state.notes.confirm_delete(&config);
    }
}
