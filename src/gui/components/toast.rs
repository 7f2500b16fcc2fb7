// src/gui/components/toast.rs
use eframe::egui::{self, Color32, RichText};

use crate::toast::{Toast, ToastKind};

pub fn draw(ctx: &egui::Context, toast: Option<&Toast>) {
    let Some(toast) = toast else { return };

    let fill = match toast.kind {
        ToastKind::Success => Color32::from_rgb(0x21, 0x80, 0x8D),
        ToastKind::Info => Color32::from_rgb(0x5E, 0x52, 0x40),
        ToastKind::Error => Color32::from_rgb(0xC0, 0x15, 0x2F),
    };

    egui::Area::new(egui::Id::new("toast"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                ui.label(RichText::new(toast.message.as_str()).color(Color32::WHITE));
            });
        });
}
