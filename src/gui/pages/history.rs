// src/gui/pages/history.rs
//
// All listings (search + sort over ListingTable), the export bar and the two
// charts. Charts are armed on enter and mounted by App once the settle delay
// passes.

use std::time::Instant;

use eframe::egui::{self, RichText};

use crate::{
    config::state::Section,
    data::SortKey,
    gui::{
        app::App,
        components::{chart_view, export_bar, listings_table},
    },
    render::{DashboardView, ListingRow, MountPoint},
};

use super::Page;

pub struct HistoryPage;
pub static PAGE: HistoryPage = HistoryPage;

impl Page for HistoryPage {
    fn section(&self) -> Section { Section::History }
    fn title(&self) -> &'static str { "History & Analytics" }
    fn nav_label(&self) -> &'static str { "History" }

    fn on_enter(&self, app: &mut App, now: Instant) {
        if app.mounts.has(MountPoint::PriceTrendChart) {
            app.charts.price_trend.request(now);
        }
        if app.mounts.has(MountPoint::ActivityChart) {
            app.charts.activity.request(now);
        }
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, view: &DashboardView, now: Instant) {
        search_and_sort(ui, app);
        ui.add_space(4.0);

        if let Some(all) = &view.all_listings {
            // Renderer rows are in canonical order; the table supplies order + visibility.
            let rows: Vec<&ListingRow> = app
                .table
                .rows()
                .iter()
                .filter(|r| r.visible)
                .filter_map(|r| all.get(r.ix))
                .collect();

            if rows.is_empty() {
                ui.label(RichText::new("No listings match your search").italics().weak());
            } else {
                listings_table::draw(ui, "all_listings", &rows, true);
            }
            ui.label(
                RichText::new(format!("{} of {} listings", rows.len(), app.table.len())).small().weak(),
            );
        }

        ui.add_space(6.0);
        export_bar::draw(ui, app, now);
        ui.separator();

        ui.columns(2, |cols| {
            cols[0].label(RichText::new("Price Trends").strong());
            chart_view::draw(&mut cols[0], "price_trend_chart", &app.charts.price_trend);
            cols[1].label(RichText::new("Weekly Activity").strong());
            chart_view::draw(&mut cols[1], "activity_chart", &app.charts.activity);
        });
    }
}

fn search_and_sort(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Search");
        if ui
            .add(
                egui::TextEdit::singleline(&mut app.state.gui.search_text)
                    .hint_text("title, location, source…")
                    .desired_width(220.0),
            )
            .changed()
        {
            app.table.filter(&app.state.gui.search_text);
        }

        ui.label("Sort by");
        let current = app.state.gui.sort_key;
        let mut picked = current;
        egui::ComboBox::from_id_salt("sort_listings")
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for key in SortKey::ALL {
                    ui.selectable_value(&mut picked, key, key.label());
                }
            });
        if picked != current {
            logf!("UI: Sort {} → {}", current, picked);
            app.state.gui.sort_key = picked;
            app.table.sort(picked);
        }
    });
}
