// src/gui/components/listings_table.rs
//
// Draws a listings table from pre-rendered rows. Purely a view; ordering and
// visibility were decided before the rows got here.

use eframe::egui::{self, Align, Color32, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::render::ListingRow;

const PRICE_COLOUR: Color32 = Color32::from_rgb(0x21, 0x80, 0x8D);

pub fn draw(ui: &mut egui::Ui, id_salt: &str, rows: &[&ListingRow], show_source: bool) {
    let mut headers = vec!["Property", "Price", "Location", "Date Added"];
    if show_source {
        headers.push("Source");
    }
    headers.push("");

    let mut table = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::initial(220.0).at_least(120.0).resizable(true).clip(true))
        .column(Column::initial(70.0).at_least(50.0))
        .column(Column::initial(120.0).at_least(80.0).resizable(true).clip(true))
        .column(Column::initial(130.0).at_least(110.0));
    if show_source {
        table = table.column(Column::initial(100.0).at_least(70.0).clip(true));
    }
    table = table.column(Column::remainder().at_least(40.0));

    table
        .header(22.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.label(RichText::new(*h).strong());
                });
            }
        })
        .body(|mut body| {
            for r in rows {
                body.row(20.0, |mut row| {
                    row.col(|ui| { ui.label(r.title.as_str()); });
                    row.col(|ui| {
                        ui.label(RichText::new(r.price.as_str()).color(PRICE_COLOUR).strong());
                    });
                    row.col(|ui| { ui.label(r.location.as_str()); });
                    row.col(|ui| { ui.label(r.date.as_str()); });
                    if show_source {
                        row.col(|ui| { ui.label(r.source.as_deref().unwrap_or_default()); });
                    }
                    row.col(|ui| { ui.hyperlink_to("View", r.url.as_str()); });
                });
            }
        });
}
