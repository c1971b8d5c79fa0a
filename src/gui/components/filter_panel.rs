// src/gui/components/filter_panel.rs
//
// Left panel: the three search inputs. Edits go straight into the session
// state; a changed filter sends the pager back to page 1.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("🔍 Search Filters");
    ui.separator();

    let mut edited = false;

    ui.label("Role (required)");
    edited |= input(ui, &mut app.inputs.role, "e.g., Data Entry");

    ui.add_space(6.0);
    ui.label("Name (optional)");
    edited |= input(ui, &mut app.inputs.name, "e.g., Tushar");

    ui.add_space(6.0);
    ui.label("Location (optional)");
    edited |= input(ui, &mut app.inputs.location, "e.g., Surat");

    if edited && app.sync_filters() {
        ui.ctx().request_repaint();
    }

    if app.inputs.role.trim().is_empty() {
        ui.add_space(6.0);
        ui.weak("No role given: showing every candidate.");
    }
}

fn input(ui: &mut egui::Ui, text: &mut String, hint: &str) -> bool {
    ui.add(egui::TextEdit::singleline(text).hint_text(hint)).changed()
}
