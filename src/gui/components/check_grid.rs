// src/gui/components/check_grid.rs
//
// A wrapped grid of checkboxes for one fixed universe. Purely a view:
// changes are handed to `on_change(name, checked)`.

use eframe::egui;

use crate::render::Check;

pub fn draw<F>(ui: &mut egui::Ui, id_salt: &str, checks: &[Check], mut on_change: F)
where
    F: FnMut(String, bool),
{
    egui::Grid::new(id_salt)
        .num_columns(3)
        .spacing([18.0, 4.0])
        .show(ui, |ui| {
            for (i, check) in checks.iter().enumerate() {
                let mut checked = check.checked;
                if ui.checkbox(&mut checked, check.name.as_str()).changed() {
                    on_change(check.name.clone(), checked);
                }
                if (i + 1) % 3 == 0 {
                    ui.end_row();
                }
            }
        });
}
