//! Patients Grid View
//!
//! Renders the inline-editable grid. Which controls a row shows is
//! driven entirely by the edit-mode table; every user action is
//! collected during the pass and applied to the state afterwards to
//! keep the borrow of the store short.

use eframe::egui;

use crate::app::grid::{EditStopReason, GridField, PatientDraft, RowId};
use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::shared::patient::format_wire_date;
use crate::shared::Gender;

enum RowAction {
    OpenNotes(RowId),
    Edit(RowId),
    Save(RowId),
    Cancel(RowId),
    RequestDelete(RowId),
    FocusLost(RowId),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let busy = state.patients.is_busy();

    ui.horizontal(|ui| {
        ui.heading("Patients");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(!busy, egui::Button::new("➕ Add patient"))
                .clicked()
            {
                state.patients.add_row();
            }
            if state.patients.is_loading {
                ui.spinner();
                ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
            }
        });
    });
    ui.add_space(8.0);

    let mut actions: Vec<RowAction> = Vec::new();
    let ids = state.patients.store.row_ids();

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("patients_grid")
            .striped(true)
            .num_columns(7)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for header in [
                    "Last Name",
                    "First Name",
                    "Birth Date",
                    "Gender",
                    "Address",
                    "Phone Number",
                    "Actions",
                ] {
                    ui.strong(header);
                }
                ui.end_row();

                for id in ids {
                    if state.patients.modes.is_editing(id) {
                        let focus = state.patients.modes.take_focus(id);
                        let Some(draft) = state.patients.drafts.get_mut(&id) else {
                            continue;
                        };
                        render_edit_row(ui, id, draft, focus, busy, &mut actions);
                    } else {
                        let Some(row) = state.patients.store.get(id) else {
                            continue;
                        };
                        ui.label(&row.last_name);
                        ui.label(&row.first_name);
                        ui.label(row.birth_date.map(format_wire_date).unwrap_or_default());
                        ui.label(row.gender.label());
                        ui.label(&row.address);
                        ui.label(&row.phone_number);
                        ui.horizontal(|ui| {
                            if ui.add_enabled(!busy, egui::Button::new("Notes")).clicked() {
                                actions.push(RowAction::OpenNotes(id));
                            }
                            if ui.add_enabled(!busy, egui::Button::new("Edit")).clicked() {
                                actions.push(RowAction::Edit(id));
                            }
                            if ui.add_enabled(!busy, egui::Button::new("Delete")).clicked() {
                                actions.push(RowAction::RequestDelete(id));
                            }
                        });
                    }
                    ui.end_row();
                }
            });

        if state.patients.store.is_empty() && !state.patients.is_loading {
            ui.add_space(12.0);
            ui.colored_label(colors::TEXT_SECONDARY, "No patients found.");
        }
    });

    apply_actions(state, actions);
    render_delete_dialog(ui.ctx(), state);
}

fn render_edit_row(
    ui: &mut egui::Ui,
    id: RowId,
    draft: &mut PatientDraft,
    focus: Option<GridField>,
    busy: bool,
    actions: &mut Vec<RowAction>,
) {
    let mut lost_focus = false;

    let response = ui.add(egui::TextEdit::singleline(&mut draft.last_name).desired_width(110.0));
    if focus == Some(GridField::LastName) {
        response.request_focus();
    }
    lost_focus |= response.lost_focus();

    let response = ui.add(egui::TextEdit::singleline(&mut draft.first_name).desired_width(110.0));
    if focus == Some(GridField::FirstName) {
        response.request_focus();
    }
    lost_focus |= response.lost_focus();

    let response = ui.add(
        egui::TextEdit::singleline(&mut draft.birth_date)
            .hint_text("YYYY-MM-DD")
            .desired_width(100.0),
    );
    lost_focus |= response.lost_focus();

    egui::ComboBox::from_id_salt(("patient-gender", id))
        .selected_text(draft.gender.label())
        .width(60.0)
        .show_ui(ui, |ui| {
            for gender in Gender::ALL {
                ui.selectable_value(&mut draft.gender, gender, gender.label());
            }
        });

    let response = ui.add(egui::TextEdit::singleline(&mut draft.address).desired_width(160.0));
    lost_focus |= response.lost_focus();

    let response = ui.add(egui::TextEdit::singleline(&mut draft.phone_number).desired_width(110.0));
    lost_focus |= response.lost_focus();

    ui.horizontal(|ui| {
        let can_save = draft.has_identity() && !busy;
        if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
            actions.push(RowAction::Save(id));
        }
        if ui.add_enabled(!busy, egui::Button::new("Cancel")).clicked() {
            actions.push(RowAction::Cancel(id));
        }
    });

    if lost_focus {
        actions.push(RowAction::FocusLost(id));
    }
}

fn apply_actions(state: &mut AppState, actions: Vec<RowAction>) {
    let config = state.config.clone();
    for action in actions {
        match action {
            RowAction::OpenNotes(id) => {
                if let Some(row) = state.patients.store.get(id) {
                    let (first_name, last_name) =
                        (row.first_name.clone(), row.last_name.clone());
                    state.open_notes(first_name, last_name);
                }
            }
            RowAction::Edit(id) => state.patients.edit_row(id),
            RowAction::Save(id) => {
                state
                    .patients
                    .stop_edit(id, EditStopReason::Save, &config, &mut state.toasts)
            }
            RowAction::Cancel(id) => {
                state
                    .patients
                    .stop_edit(id, EditStopReason::Cancel, &config, &mut state.toasts)
            }
            RowAction::FocusLost(id) => {
                state
                    .patients
                    .stop_edit(id, EditStopReason::FocusLost, &config, &mut state.toasts)
            }
            RowAction::RequestDelete(id) => {
                if let Some(row) = state.patients.store.get(id) {
                    let (first_name, last_name) =
                        (row.first_name.clone(), row.last_name.clone());
                    state.patients.request_delete(first_name, last_name);
                }
            }
        }
    }
}

fn render_delete_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(target) = state.patients.delete_confirm.clone() else {
        return;
    };

    let mut confirm = false;
    let mut cancel = false;
    egui::Window::new("Delete patient")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!(
                "Delete patient {} {}? This action cannot be undone.",
                target.first_name, target.last_name
            ));
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
        state.patients.cancel_delete();
    }
    if confirm {
        let config = state.config.clone();
        state.patients.confirm_delete(&config);
    }
}
