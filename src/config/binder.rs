// src/config/binder.rs
//! Config binder: the pure half of every configuration widget.
//!
//! Widgets never write into `MonitorConfig` themselves. They turn a value
//! change into a `ConfigEvent`, and `transition` computes the next config:
//!
//! - Price sliders clamp into the slider bounds and snap to the step grid,
//!   then keep `min < max` by pushing the edited bound one step away from
//!   its sibling.
//! - Set toggles (locations, property types, websites, days) insert/remove
//!   with a membership check. Names outside the fixed universe are ignored.
//! - Interval clamps into its slider bounds. Email/rooms are taken as-is.
//!
//! The GUI adapter is `AppState::dispatch`.

use std::collections::BTreeSet;

use super::consts::*;
use super::options::{Day, MonitorConfig, NotificationFrequency};

/// The fixed sets the selections must stay inside.
#[derive(Clone, Copy, Debug)]
pub struct Universe<'a> {
    pub neighborhoods: &'a [String],
    pub property_types: &'a [String],
    pub websites: &'a [String],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigEvent {
    PriceMin(i32),
    PriceMax(i32),
    SetLocation { name: String, checked: bool },
    SetPropertyType { name: String, checked: bool },
    SetWebsite { name: String, checked: bool },
    SetDay { day: Day, checked: bool },
    Interval(u32),
    Frequency(NotificationFrequency),
    Email(String),
    Rooms(String),
}

/// old config + event → new config
pub fn transition(config: &MonitorConfig, event: &ConfigEvent, universe: &Universe<'_>) -> MonitorConfig {
    let mut next = config.clone();

    match event {
        ConfigEvent::PriceMin(v) => {
            let v = snap_price(*v);
            next.price.min = if v >= next.price.max { next.price.max - PRICE_STEP } else { v };
        }
        ConfigEvent::PriceMax(v) => {
            let v = snap_price(*v);
            next.price.max = if v <= next.price.min { next.price.min + PRICE_STEP } else { v };
        }
        ConfigEvent::SetLocation { name, checked } => {
            set_member(&mut next.locations, universe.neighborhoods, name, *checked, "location");
        }
        ConfigEvent::SetPropertyType { name, checked } => {
            set_member(&mut next.property_types, universe.property_types, name, *checked, "property type");
        }
        ConfigEvent::SetWebsite { name, checked } => {
            set_member(&mut next.websites, universe.websites, name, *checked, "website");
        }
        ConfigEvent::SetDay { day, checked } => {
            if *checked { next.active_days.insert(*day); } else { next.active_days.remove(day); }
        }
        ConfigEvent::Interval(m) => {
            next.monitoring_interval = (*m).clamp(INTERVAL_MIN, INTERVAL_MAX);
        }
        ConfigEvent::Frequency(f) => next.notification_frequency = *f,
        ConfigEvent::Email(e) => next.email = e.clone(),
        ConfigEvent::Rooms(r) => next.rooms = r.clone(),
    }

    next
}

/// Clamp into the slider bounds and round down onto the step grid, so a
/// one-step push from the sibling bound stays inside the bounds.
fn snap_price(v: i32) -> i32 {
    let v = v.clamp(PRICE_FLOOR, PRICE_CEIL);
    PRICE_FLOOR + (v - PRICE_FLOOR) / PRICE_STEP * PRICE_STEP
}

fn set_member(set: &mut BTreeSet<String>, universe: &[String], name: &str, checked: bool, what: &str) {
    if !universe.iter().any(|u| u == name) {
        logw!("Config: Unknown {} {:?}, ignoring", what, name);
        return;
    }
    if checked {
        if !set.contains(name) {
            set.insert(s!(name));
        }
    } else {
        set.remove(name);
    }
}

/* ---------------- Paired labels ---------------- */

pub fn price_label(value: i32) -> String {
    euro!(value)
}

pub fn interval_label(minutes: u32) -> String {
    format!("{} minutes", minutes)
}
