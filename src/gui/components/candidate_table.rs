// src/gui/components/candidate_table.rs
//
// Draws the current page: five fields plus the two action affordances.
// Purely a view; clicks are collected and dispatched after the table.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::COUNTRY_CODE,
    dispatch::Action,
    gui::{actions, app::App},
    render::{CandidateCard, ContactAction, ResumeAction, FIELD_LABELS},
    runner::ResultsPage,
};

const ROW_H: f32 = 26.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App, results: &ResultsPage) {
    if results.cards.is_empty() {
        ui.weak("No matching candidates.");
        return;
    }

    let mut clicked: Option<Action> = None;
    let avail_h = (ui.available_height() - 140.0).max(ROW_H * 3.0);

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .max_scroll_height(avail_h)
        .id_salt("candidate_table");
    for w in [180.0, 160.0, 120.0, 140.0, 90.0] {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }
    table = table.column(Column::remainder().at_least(240.0));

    table
        .header(22.0, |mut header| {
            for label in FIELD_LABELS {
                header.col(|ui| { ui.strong(label); });
            }
            header.col(|ui| { ui.strong("Actions"); });
        })
        .body(|body| {
            body.rows(ROW_H, results.cards.len(), |mut row| {
                let Some(card) = results.cards.get(row.index()) else { return };
                for value in card.fields() {
                    row.col(|ui| { ui.label(value); });
                }
                row.col(|ui| {
                    ui.push_id(card.source_ix, |ui| {
                        if let Some(a) = action_cell(ui, card) { clicked = Some(a); }
                    });
                });
            });
        });

    if let Some(action) = clicked {
        actions::open(app, ui.ctx(), &action);
    }
}

fn action_cell(ui: &mut egui::Ui, card: &CandidateCard) -> Option<Action> {
    let mut out = None;

    match &card.resume {
        ResumeAction::Open { url } => {
            if ui.button("📄 Open Resume").on_hover_text(url.as_str()).clicked() {
                out = card.resume.action();
            }
        }
        ResumeAction::Unavailable => { ui.weak(format!("❌ {}", ResumeAction::disabled_label())); }
    }

    match &card.whatsapp {
        ContactAction::WhatsApp { digits, .. } => {
            if ui
                .button("💬 WhatsApp")
                .on_hover_text(format!("+{COUNTRY_CODE} {digits}"))
                .clicked()
            {
                out = card.whatsapp.action();
            }
        }
        ContactAction::Unavailable => { ui.weak(format!("❌ {}", ContactAction::disabled_label())); }
    }

    out
}
