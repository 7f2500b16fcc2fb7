// src/gui/pages/mod.rs
use std::time::Instant;

use eframe::egui;

use crate::{config::state::Section, gui::app::App, render::DashboardView};

pub mod configuration;
pub mod dashboard;
pub mod history;
pub mod websites;

pub trait Page: Send + Sync + 'static {
    fn section(&self) -> Section;
    fn title(&self) -> &'static str;

    /// Sidebar label; defaults to the title.
    fn nav_label(&self) -> &'static str {
        self.title()
    }

    /// Draw the section body. `view` is this frame's render of the dataset + config.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App, view: &DashboardView, now: Instant);

    /// Called when the section becomes active.
    fn on_enter(&self, _app: &mut App, _now: Instant) {}
}
