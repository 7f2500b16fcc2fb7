// src/render.rs
//! View renderer: Dataset + config snapshot → display strings.
//!
//! Pure and rebuilt from scratch on every call; the GUI paints whatever comes
//! out. A section whose mount point is absent from `Mounts` is skipped (left
//! `None`), never an error.

use std::collections::HashSet;

use crate::config::binder::{interval_label, price_label};
use crate::config::options::MonitorConfig;
use crate::core::{format_date, format_price, split_log_line};
use crate::data::visible_cells;
use crate::store::{Dataset, Listing};

/// Named places the renderer can attach output to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MountPoint {
    MonitoringStatus,
    Statistics,
    RecentListings,
    SystemLogs,
    LocationChecks,
    PropertyTypeChecks,
    WebsiteToggles,
    ConfigLabels,
    AllListings,
    PriceTrendChart,
    ActivityChart,
}

impl MountPoint {
    pub const ALL: [MountPoint; 11] = [
        MountPoint::MonitoringStatus,
        MountPoint::Statistics,
        MountPoint::RecentListings,
        MountPoint::SystemLogs,
        MountPoint::LocationChecks,
        MountPoint::PropertyTypeChecks,
        MountPoint::WebsiteToggles,
        MountPoint::ConfigLabels,
        MountPoint::AllListings,
        MountPoint::PriceTrendChart,
        MountPoint::ActivityChart,
    ];
}

/// The set of mount points a frontend actually has.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mounts(HashSet<MountPoint>);

impl Mounts {
    pub fn all() -> Self {
        Self(MountPoint::ALL.into_iter().collect())
    }

    pub fn only(points: &[MountPoint]) -> Self {
        Self(points.iter().copied().collect())
    }

    pub fn has(&self, point: MountPoint) -> bool {
        self.0.contains(&point)
    }

    fn mounted<T>(&self, point: MountPoint, build: impl FnOnce() -> T) -> Option<T> {
        if self.has(point) {
            Some(build())
        } else {
            logd!("Render: {:?} not mounted, skipping", point);
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub text: String,
    pub tone: Tone,
    pub last_scan: String,
    pub next_scan: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// One listing row as text. `source` is None for tables without that column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub title: String,
    pub price: String,
    pub location: String,
    pub date: String,
    pub source: Option<String>,
    pub url: String,
}

impl ListingRow {
    pub fn recent(l: &Listing) -> Self {
        Self {
            title: l.title.clone(),
            price: format_price(l.price),
            location: l.location.clone(),
            date: format_date(&l.added_at),
            source: None,
            url: l.url.clone(),
        }
    }

    pub fn with_source(l: &Listing) -> Self {
        let [title, price, location, date, source] = visible_cells(l);
        Self { title, price, location, date, source: Some(source), url: l.url.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub time: String,
    pub message: String,
}

/// Checkbox state for one member of a fixed universe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Check {
    pub name: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigLabels {
    pub price_min: String,
    pub price_max: String,
    pub interval: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub status: Option<StatusBadge>,
    pub stats: Option<Vec<StatCard>>,
    pub recent: Option<Vec<ListingRow>>,
    pub logs: Option<Vec<LogLine>>,
    pub locations: Option<Vec<Check>>,
    pub property_types: Option<Vec<Check>>,
    pub websites: Option<Vec<Check>>,
    pub labels: Option<ConfigLabels>,
    pub all_listings: Option<Vec<ListingRow>>,
}

fn checks(universe: &[String], selected: &std::collections::BTreeSet<String>) -> Vec<Check> {
    universe
        .iter()
        .map(|name| Check { name: name.clone(), checked: selected.contains(name) })
        .collect()
}

impl DashboardView {
    pub fn render(ds: &Dataset, config: &MonitorConfig, mounts: &Mounts) -> Self {
        Self {
            status: mounts.mounted(MountPoint::MonitoringStatus, || {
                let (text, tone) = if ds.status.active {
                    ("Monitoring Active", Tone::Success)
                } else {
                    ("Monitoring Inactive", Tone::Error)
                };
                StatusBadge {
                    text: s!(text),
                    tone,
                    last_scan: format_date(&ds.status.last_scan),
                    next_scan: format_date(&ds.status.next_scan),
                }
            }),
            stats: mounts.mounted(MountPoint::Statistics, || {
                let st = &ds.statistics;
                vec![
                    StatCard { label: "Listings Today", value: st.total_listings_today.to_string() },
                    StatCard { label: "New This Week", value: st.new_listings_week.to_string() },
                    StatCard { label: "Average Price", value: format_price(st.average_price) },
                    StatCard { label: "Active Filters", value: st.active_filters.to_string() },
                ]
            }),
            recent: mounts.mounted(MountPoint::RecentListings, || {
                ds.recent_listings.iter().map(ListingRow::recent).collect()
            }),
            logs: mounts.mounted(MountPoint::SystemLogs, || {
                ds.system_logs
                    .iter()
                    .map(|line| {
                        let (time, message) = split_log_line(line);
                        LogLine { time: s!(time), message: s!(message) }
                    })
                    .collect()
            }),
            locations: mounts.mounted(MountPoint::LocationChecks, || checks(&ds.neighborhoods, &config.locations)),
            property_types: mounts.mounted(MountPoint::PropertyTypeChecks, || {
                checks(&ds.property_types, &config.property_types)
            }),
            websites: mounts.mounted(MountPoint::WebsiteToggles, || checks(&ds.websites, &config.websites)),
            labels: mounts.mounted(MountPoint::ConfigLabels, || ConfigLabels {
                price_min: price_label(config.price.min),
                price_max: price_label(config.price.max),
                interval: interval_label(config.monitoring_interval),
            }),
            all_listings: mounts.mounted(MountPoint::AllListings, || {
                ds.history_listings.iter().map(ListingRow::with_source).collect()
            }),
        }
    }
}
