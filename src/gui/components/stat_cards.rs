// src/gui/components/stat_cards.rs
use eframe::egui::{self, Color32, RichText};

use crate::render::{StatCard, StatusBadge, Tone};

const GREEN: Color32 = Color32::from_rgb(0x32, 0xB8, 0x6B);
const RED: Color32 = Color32::from_rgb(0xC0, 0x15, 0x2F);

pub fn status_badge(ui: &mut egui::Ui, status: &StatusBadge) {
    let colour = match status.tone {
        Tone::Success => GREEN,
        Tone::Error => RED,
    };
    ui.horizontal(|ui| {
        egui::Frame::new()
            .stroke(egui::Stroke::new(1.0, colour))
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(8, 2))
            .show(ui, |ui| {
                ui.label(RichText::new(status.text.as_str()).color(colour).strong());
            });
        ui.label(RichText::new(format!("Last scan: {}", status.last_scan)).weak());
        ui.label(RichText::new(format!("Next scan: {}", status.next_scan)).weak());
    });
}

pub fn draw(ui: &mut egui::Ui, cards: &[StatCard]) {
    ui.horizontal_wrapped(|ui| {
        for card in cards {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(150.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(card.value.as_str()).size(22.0).strong());
                    ui.label(RichText::new(card.label).weak());
                });
            });
        }
    });
}
