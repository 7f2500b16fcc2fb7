// src/gui/actions/export.rs
use std::time::Instant;

use crate::{file, gui::app::App, toast::Toast};

pub fn export(app: &mut App, now: Instant) {
    // normalize out_path first
    if app.state.gui.out_path_dirty {
        app.state.export.set_path(&app.state.gui.out_path_text);
        logf!("Export: Out path set → {}", app.state.export.out_path().display());
        app.state.gui.out_path_dirty = false;
    }

    logf!(
        "Export: Begin rows={}, format={:?}",
        app.dataset.history_listings.len(),
        app.state.export.format
    );

    let toast = match file::write_export(&app.dataset, &app.state.export) {
        Ok(path) => {
            logf!("Export: OK → {}", path.display());
            Toast::success("Data exported successfully!", now)
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            Toast::error(format!("Export error: {e}"), now)
        }
    };

    app.notify(toast);
}
