// src/gui/components/load_error.rs
//
// Blocking message when the candidate table can't be loaded. No controls
// are drawn; the operator has to fix the source and restart.

use eframe::egui::{self, RichText};
use crate::error::LoadError;

pub fn draw(ui: &mut egui::Ui, err: &LoadError) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(RichText::new("Cannot load candidate data").color(ui.visuals().error_fg_color));
        ui.add_space(12.0);
        ui.label(err.to_string());
        ui.add_space(12.0);
        ui.label(format!("Fix {} and restart the dashboard.", err.path().display()));
    });
}
