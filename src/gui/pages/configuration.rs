// src/gui/pages/configuration.rs
//
// Search criteria + monitoring schedule + notifications.
// Every widget edits a local copy and dispatches a ConfigEvent on change;
// nothing here writes into the config directly.

use std::time::Instant;

use eframe::egui::{self, RichText, Slider};

use crate::{
    config::{
        binder::ConfigEvent,
        consts::*,
        options::{Day, NotificationFrequency},
        state::Section,
    },
    gui::{app::App, components::check_grid},
    render::DashboardView,
    toast::Toast,
};

use super::Page;

pub struct ConfigurationPage;
pub static PAGE: ConfigurationPage = ConfigurationPage;

impl Page for ConfigurationPage {
    fn section(&self) -> Section { Section::Configuration }
    fn title(&self) -> &'static str { "Configuration" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App, view: &DashboardView, now: Instant) {
        section_heading(ui, "Price Range");
        price_sliders(ui, app, view);
        ui.add_space(8.0);

        if let Some(checks) = &view.locations {
            section_heading(ui, "Locations");
            check_grid::draw(ui, "location_checks", checks, |name, checked| {
                app.dispatch(ConfigEvent::SetLocation { name, checked });
            });
            ui.add_space(8.0);
        }

        if let Some(checks) = &view.property_types {
            section_heading(ui, "Property Types");
            check_grid::draw(ui, "property_type_checks", checks, |name, checked| {
                app.dispatch(ConfigEvent::SetPropertyType { name, checked });
            });
            ui.add_space(8.0);
        }

        section_heading(ui, "Rooms");
        let mut rooms = app.state.config.rooms.clone();
        if ui.add(egui::TextEdit::singleline(&mut rooms).desired_width(80.0)).changed() {
            app.dispatch(ConfigEvent::Rooms(rooms));
        }
        ui.add_space(8.0);

        section_heading(ui, "Monitoring Schedule");
        interval_slider(ui, app, view);
        active_days(ui, app);
        ui.add_space(8.0);

        section_heading(ui, "Notifications");
        notifications(ui, app);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("Save Configuration").clicked() {
                // Nothing is persisted; the snapshot only goes to the log.
                logf!("Config: Save requested → {:?}", app.state.config);
                app.notify(Toast::success("Configuration saved successfully!", now));
            }
            if ui.button("Test Notification").clicked() {
                logf!("Config: Test notification → {}", app.state.config.email);
                app.notify(Toast::success("Test notification sent!", now));
            }
        });
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).strong().size(15.0));
}

fn price_sliders(ui: &mut egui::Ui, app: &mut App, view: &DashboardView) {
    let (min_label, max_label) = match &view.labels {
        Some(l) => (l.price_min.clone(), l.price_max.clone()),
        None => (s!(), s!()),
    };

    let mut min = app.state.config.price.min;
    ui.horizontal(|ui| {
        ui.label("Min");
        let resp = ui.add(
            Slider::new(&mut min, PRICE_FLOOR..=PRICE_CEIL)
                .step_by(PRICE_STEP as f64)
                .show_value(false),
        );
        ui.label(RichText::new(min_label).monospace());
        if resp.changed() {
            app.dispatch(ConfigEvent::PriceMin(min));
        }
    });

    let mut max = app.state.config.price.max;
    ui.horizontal(|ui| {
        ui.label("Max");
        let resp = ui.add(
            Slider::new(&mut max, PRICE_FLOOR..=PRICE_CEIL)
                .step_by(PRICE_STEP as f64)
                .show_value(false),
        );
        ui.label(RichText::new(max_label).monospace());
        if resp.changed() {
            app.dispatch(ConfigEvent::PriceMax(max));
        }
    });
}

fn interval_slider(ui: &mut egui::Ui, app: &mut App, view: &DashboardView) {
    let label = view.labels.as_ref().map(|l| l.interval.clone()).unwrap_or_default();
    let mut minutes = app.state.config.monitoring_interval;
    ui.horizontal(|ui| {
        ui.label("Check every");
        let resp = ui.add(
            Slider::new(&mut minutes, INTERVAL_MIN..=INTERVAL_MAX)
                .step_by(INTERVAL_STEP as f64)
                .show_value(false),
        );
        ui.label(RichText::new(label).monospace());
        if resp.changed() {
            app.dispatch(ConfigEvent::Interval(minutes));
        }
    });
}

fn active_days(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Active days");
        for day in Day::ALL {
            let on = app.state.config.active_days.contains(&day);
            if ui.selectable_label(on, day.label()).clicked() {
                app.dispatch(ConfigEvent::SetDay { day, checked: !on });
            }
        }
    });
}

fn notifications(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Email");
        let mut email = app.state.config.email.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut email).desired_width(240.0))
            .changed()
        {
            app.dispatch(ConfigEvent::Email(email));
        }
    });

    ui.horizontal(|ui| {
        ui.label("Frequency");
        let current = app.state.config.notification_frequency;
        let mut picked = current;
        egui::ComboBox::from_id_salt("notification_frequency")
            .selected_text(current.label())
            .show_ui(ui, |ui| {
                for f in NotificationFrequency::ALL {
                    ui.selectable_value(&mut picked, f, f.label());
                }
            });
        if picked != current {
            app.dispatch(ConfigEvent::Frequency(picked));
        }
    });
}
