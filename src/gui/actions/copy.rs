// src/gui/actions/copy.rs
use eframe::egui;

use crate::{
    data::{FilteredView, SearchQuery},
    file,
    gui::app::App,
    model::Dataset,
};

/// Copy every filtered row (not just the visible page) as CSV.
pub fn copy(app: &mut App, ui_ctx: &egui::Context, table: &Dataset) {
    let view = FilteredView::from_raw(table, SearchQuery::from_state(&app.state.search));

    if view.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = file::to_export_string(&view);
    logf!("Copy: rows={}", view.len());

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", view.len()));
}
