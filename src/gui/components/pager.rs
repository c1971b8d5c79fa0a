// src/gui/components/pager.rs
//
// Bottom controls: page selector, copy, status and source footer.
// A page change lands in the session state and shows on the next pass.

use eframe::egui;

use crate::{gui::{actions, app::App}, model::Dataset, runner::ResultsPage};

pub fn draw(ui: &mut egui::Ui, app: &mut App, table: &Dataset, results: &ResultsPage) {
    ui.heading("🔁 Change Page");

    let total = results.total_pages;
    let mut page = results.page;

    ui.horizontal(|ui| {
        if ui.add_enabled(page > 1, egui::Button::new("◀")).clicked() {
            page -= 1;
        }

        ui.label("Go to Page");
        ui.add(egui::DragValue::new(&mut page).range(1..=total).speed(0.1));
        ui.label(format!("of {}", total));

        if ui.add_enabled(page < total, egui::Button::new("▶")).clicked() {
            page += 1;
        }
    });

    if results.clamped {
        ui.weak(format!("Requested page is out of range; showing page {}.", results.page));
    }

    if page != results.page {
        logd!("UI: Page {} → {}", results.page, page);
        app.state.search.set_page(page);
        ui.ctx().request_repaint();
    }

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Copy results").clicked() {
            actions::copy(app, ui.ctx(), table);
        }
        ui.label(app.status.as_str());
    });

    ui.add_space(6.0);
    ui.weak(format!(
        "Source: {} ({} candidate(s))",
        app.store.path().display(),
        table.len()
    ));
}
