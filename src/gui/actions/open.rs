// src/gui/actions/open.rs
use eframe::egui;

use crate::{
    dispatch::{dispatch, Action, LinkOpener, OpenError},
    gui::app::App,
};

/// Opens links in a new browser tab through egui's platform integration.
pub struct EguiOpener<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiOpener<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self { Self { ctx } }
}

impl LinkOpener for EguiOpener<'_> {
    fn open(&mut self, url: &str) -> Result<(), OpenError> {
        self.ctx.open_url(egui::OpenUrl::new_tab(url));
        Ok(())
    }
}

pub fn open(app: &mut App, ctx: &egui::Context, action: &Action) {
    let mut opener = EguiOpener::new(ctx);
    match dispatch(&mut opener, action) {
        Ok(()) => app.status(format!("Opened {}", action)),
        Err(e) => app.status(format!("Could not open {}: {}", action, e)),
    }
}
