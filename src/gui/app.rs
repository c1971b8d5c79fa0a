// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    error::LoadError,
    model::Dataset,
    runner::{self, ResultsPage},
    store::CandidateStore,
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Text buffers behind the three filter inputs.
#[derive(Clone, Debug, Default)]
pub struct FilterInputs {
    pub role: String,
    pub name: String,
    pub location: String,
}

pub struct App {
    // single source of truth for the search (UI thread only)
    pub state: AppState,

    pub inputs: FilterInputs,

    // loaded once at startup; Err blocks the whole session
    pub store: CandidateStore,
    pub table: Result<Arc<Dataset>, Arc<LoadError>>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut store = CandidateStore::new(&state.options.dataset);
        let table = store.table();

        let status = match &table {
            Ok(ds) => format!("Loaded {} candidate(s)", ds.len()),
            Err(_) => s!("Load failed"),
        };

        logf!("Init: dataset={}, page_size={}", store.path().display(), state.options.page_size);

        Self {
            state,
            inputs: FilterInputs::default(),
            store,
            table,
            status,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Push edited inputs into the session state. Any change resets the page.
    pub fn sync_filters(&mut self) -> bool {
        let search = &mut self.state.search;
        let mut changed = false;
        changed |= search.set_role(&self.inputs.role);
        changed |= search.set_name(&self.inputs.name);
        changed |= search.set_location(&self.inputs.location);
        if changed {
            logd!(
                "UI: Filters → role={:?}, name={:?}, location={:?}",
                search.role(), search.name(), search.location()
            );
        }
        changed
    }

    /// One full pass over the cached table.
    pub fn results(&mut self, table: &Dataset) -> ResultsPage {
        runner::render_pass(table, &mut self.state.search, self.state.options.page_size)
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let table = match &self.table {
            Ok(ds) => Arc::clone(ds),
            Err(e) => {
                let e = Arc::clone(e);
                egui::CentralPanel::default().show(ctx, |ui| {
                    components::load_error::draw(ui, &e);
                });
                return;
            }
        };

        egui::SidePanel::left("filters")
            .resizable(false)
            .show(ctx, |ui| {
                components::filter_panel::draw(ui, self);
            });

        let results = self.results(&table);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(results.heading());
            ui.separator();

            components::candidate_table::draw(ui, self, &results);

            ui.separator();

            components::pager::draw(ui, self, &table, &results);
        });
    }
}
