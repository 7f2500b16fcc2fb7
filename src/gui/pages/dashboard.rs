// src/gui/pages/dashboard.rs
use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::{
    config::state::Section,
    gui::{app::App, components::{listings_table, stat_cards}},
    render::DashboardView,
};

use super::Page;

pub struct DashboardPage;
pub static PAGE: DashboardPage = DashboardPage;

impl Page for DashboardPage {
    fn section(&self) -> Section { Section::Dashboard }
    fn title(&self) -> &'static str { "Dashboard" }

    fn draw(&self, ui: &mut egui::Ui, _app: &mut App, view: &DashboardView, _now: Instant) {
        if let Some(status) = &view.status {
            stat_cards::status_badge(ui, status);
            ui.add_space(6.0);
        }

        if let Some(cards) = &view.stats {
            stat_cards::draw(ui, cards);
            ui.add_space(10.0);
        }

        if let Some(recent) = &view.recent {
            ui.label(RichText::new("Recent Listings").strong().size(16.0));
            let rows: Vec<_> = recent.iter().collect();
            listings_table::draw(ui, "recent_listings", &rows, false);
            ui.add_space(10.0);
        }

        if let Some(logs) = &view.logs {
            ui.label(RichText::new("System Logs").strong().size(16.0));
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                for entry in logs {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(entry.time.as_str()).monospace().weak());
                        ui.label("-");
                        ui.label(entry.message.as_str());
                    });
                }
            });
        }
    }
}
