// src/gui/actions/copy.rs
use std::time::Instant;

use eframe::egui;

use crate::{file, gui::app::App, toast::Toast};

pub fn copy(app: &mut App, ui_ctx: &egui::Context, now: Instant) {
    let txt = file::export_text(&app.dataset, &app.state.export);
    logf!(
        "Copy: rows={}, format={:?}, bytes={}",
        app.dataset.history_listings.len(),
        app.state.export.format,
        txt.len()
    );
    ui_ctx.copy_text(txt);
    app.notify(Toast::info("Copied to clipboard", now));
}
