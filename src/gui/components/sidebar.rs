// src/gui/components/sidebar.rs
//
// Renders the left navigation and performs the section switch itself.

use std::time::Instant;

use eframe::egui::{self, Color32, RichText};

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App, now: Instant) {
    ui.add_space(8.0);
    ui.heading("Turin Watch");
    ui.label(RichText::new("Rental monitor").small().weak());
    ui.separator();

    let current = app.state.gui.section;
    for page in router::all_pages() {
        let selected = page.section() == current;
        if ui.selectable_label(selected, page.nav_label()).clicked() && !selected {
            app.go_to(page.section(), now);
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.add_space(8.0);
        let (dot, text) = if app.dataset.status.active {
            (Color32::from_rgb(0x32, 0xB8, 0x6B), "● Monitoring")
        } else {
            (Color32::from_rgb(0xC0, 0x15, 0x2F), "● Paused")
        };
        ui.label(RichText::new(text).color(dot).small());
    });
}
