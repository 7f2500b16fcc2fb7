// src/gui/components/export_bar.rs

use std::time::Instant;

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App, now: Instant) {
    // --- Format ---
    let prev_fmt = app.state.export.format;
    let mut fmt = prev_fmt;

    ui.horizontal(|ui| {
        ui.label("Format:");
        ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");

        ui.label("Output:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(260.0),
            )
            .changed()
        {
            app.state.gui.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.state.gui.out_path_text);
        }
    });

    if fmt != prev_fmt {
        app.state.export.format = fmt;
        logf!("UI: Export format → {:?}", fmt);
        if !app.state.gui.out_path_dirty {
            app.state.gui.out_path_text = app.state.export.out_path().to_string_lossy().into_owned();
        }
    }

    // --- Actions ---
    ui.horizontal(|ui| {
        if ui.button("Export CSV").clicked() {
            actions::export(app, now);
        }
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx(), now);
        }
    });
}
