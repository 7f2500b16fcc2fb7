// src/gui/pages/websites.rs
use std::time::Instant;

use eframe::egui::{self, Color32, RichText};

use crate::{
    config::{binder::ConfigEvent, state::Section},
    gui::app::App,
    render::DashboardView,
};

use super::Page;

pub struct WebsitesPage;
pub static PAGE: WebsitesPage = WebsitesPage;

impl Page for WebsitesPage {
    fn section(&self) -> Section { Section::Websites }
    fn title(&self) -> &'static str { "Website Settings" }
    fn nav_label(&self) -> &'static str { "Websites" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, view: &DashboardView, _now: Instant) {
        let Some(sites) = &view.websites else { return };

        ui.label("Sources checked on every monitoring cycle:");
        ui.add_space(6.0);

        for site in sites {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(280.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(site.name.as_str()).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut enabled = site.checked;
                        if ui.checkbox(&mut enabled, "").changed() {
                            app.dispatch(ConfigEvent::SetWebsite { name: site.name.clone(), checked: enabled });
                        }
                        let (text, colour) = if site.checked {
                            ("enabled", Color32::from_rgb(0x32, 0xB8, 0x6B))
                        } else {
                            ("disabled", Color32::GRAY)
                        };
                        ui.label(RichText::new(text).color(colour));
                    });
                });
            });
        }
    }
}
