// src/store.rs
//
// Dataset provider: the static sample data every other part reads from.
// Built once at start-up, never mutated. No I/O.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::{
    binder::Universe,
    consts::{DATE_INPUT_FMT, DEFAULT_SOURCE},
    options::{Day, MonitorConfig, NotificationFrequency, PriceRange},
};

/// One rental property record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub title: String,
    pub price: i32,
    pub location: String,
    pub added_at: NaiveDateTime,
    pub url: String,
    pub source: Option<String>,
}

impl Listing {
    /// `added_at` is `YYYY-MM-DD HH:MM`.
    pub fn parse(
        title: &str,
        price: i32,
        location: &str,
        added_at: &str,
        url: &str,
        source: Option<&str>,
    ) -> Result<Self, chrono::ParseError> {
        Ok(Self {
            title: s!(title),
            price,
            location: s!(location),
            added_at: NaiveDateTime::parse_from_str(added_at, DATE_INPUT_FMT)?,
            url: s!(url),
            source: source.map(String::from),
        })
    }

    /// Site name shown in tables; unnamed listings came from the default source.
    pub fn source_name(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonitoringStatus {
    pub active: bool,
    pub last_scan: NaiveDateTime,
    pub next_scan: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_listings_today: u32,
    pub new_listings_week: u32,
    pub average_price: i32,
    pub active_filters: u32,
}

/// Labels + values for one chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl Series {
    fn new(labels: &[&str], values: &[f64]) -> Self {
        Self {
            labels: labels.iter().map(|l| s!(*l)).collect(),
            values: values.to_vec(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Dataset {
    pub status: MonitoringStatus,
    pub statistics: Statistics,
    pub recent_listings: Vec<Listing>,
    /// Recent listings plus older ones; backs the History table and the export.
    pub history_listings: Vec<Listing>,
    /// `"HH:MM - message"`
    pub system_logs: Vec<String>,
    pub neighborhoods: Vec<String>,
    pub property_types: Vec<String>,
    pub websites: Vec<String>,
    pub price_trend: Series,
    pub activity: Series,
}

type RawListing = (&'static str, i32, &'static str, &'static str, &'static str, Option<&'static str>);

const RECENT: &[RawListing] = &[
    ("Bilocale Centro Storico", 580, "Centro", "2025-08-04 10:45", "https://idealista.it/example1", None),
    ("Studio Crocetta", 450, "Crocetta", "2025-08-04 09:30", "https://idealista.it/example2", None),
    ("Trilocale San Salvario", 720, "San Salvario", "2025-08-04 08:15", "https://idealista.it/example3", None),
];

const OLDER: &[RawListing] = &[
    ("Monolocale Vanchiglia", 400, "Vanchiglia", "2025-08-03 16:20", "https://cercoaloggio.it/example1", Some("Cercoaloggio")),
    ("Appartamento Borgo Po", 850, "Borgo Po", "2025-08-03 14:15", "https://subito.it/example1", Some("Subito")),
];

const LOGS: &[&str] = &[
    "11:30 - Scraped 45 listings from Idealista",
    "11:25 - Found 3 new matching properties",
    "11:20 - Email notification sent",
    "11:15 - Started monitoring cycle",
];

const NEIGHBORHOODS: &[&str] = &["Centro", "Crocetta", "San Salvario", "Vanchiglia", "Borgo Po", "Porta Nuova"];
const PROPERTY_TYPES: &[&str] = &["Apartment", "Studio", "Room", "House"];
const WEBSITES: &[&str] = &["Idealista", "Cercoaloggio", "Subito"];

pub const EXPORT_HEADERS: [&str; 5] = ["Property Title", "Price", "Location", "Date Added", "Source"];

fn build_listings(raw: &[RawListing]) -> Vec<Listing> {
    raw.iter()
        .filter_map(|&(title, price, location, added, url, source)| {
            match Listing::parse(title, price, location, added, url, source) {
                Ok(l) => Some(l),
                Err(e) => {
                    loge!("Data: Bad timestamp {:?} for {:?}: {}", added, title, e);
                    None
                }
            }
        })
        .collect()
}

fn parse_ts(text: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(text, DATE_INPUT_FMT).unwrap_or_else(|e| {
        loge!("Data: Bad timestamp {:?}: {}", text, e);
        NaiveDateTime::default()
    })
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s!(*s)).collect()
}

impl Dataset {
    pub fn sample() -> Self {
        let recent_listings = build_listings(RECENT);
        let mut history_listings = recent_listings.clone();
        history_listings.extend(build_listings(OLDER));

        let ds = Self {
            status: MonitoringStatus {
                active: true,
                last_scan: parse_ts("2025-08-04 11:30"),
                next_scan: parse_ts("2025-08-04 12:00"),
            },
            statistics: Statistics {
                total_listings_today: 12,
                new_listings_week: 45,
                average_price: 650,
                active_filters: 5,
            },
            recent_listings,
            history_listings,
            system_logs: owned(LOGS),
            neighborhoods: owned(NEIGHBORHOODS),
            property_types: owned(PROPERTY_TYPES),
            websites: owned(WEBSITES),
            price_trend: Series::new(
                &["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug"],
                &[620.0, 630.0, 640.0, 635.0, 650.0, 645.0, 660.0, 650.0],
            ),
            activity: Series::new(
                &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
                &[8.0, 12.0, 15.0, 10.0, 18.0, 5.0, 3.0],
            ),
        };

        logd!(
            "Data: Sample loaded (recent={}, history={}, logs={})",
            ds.recent_listings.len(),
            ds.history_listings.len(),
            ds.system_logs.len()
        );
        ds
    }

    /// Start-up snapshot that seeds `AppState`.
    pub fn default_config(&self) -> MonitorConfig {
        MonitorConfig {
            price: PriceRange { min: 300, max: 800 },
            locations: ["Centro", "Crocetta"].into_iter().map(String::from).collect(),
            property_types: ["Apartment", "Studio"].into_iter().map(String::from).collect(),
            rooms: s!("1-3"),
            monitoring_interval: 30,
            notification_frequency: NotificationFrequency::Immediate,
            email: s!("user@example.com"),
            websites: self.websites.iter().cloned().collect(),
            active_days: Day::ALL.into_iter().collect::<BTreeSet<_>>(),
        }
    }

    pub fn universe(&self) -> Universe<'_> {
        Universe {
            neighborhoods: &self.neighborhoods,
            property_types: &self.property_types,
            websites: &self.websites,
        }
    }

    /// Fixed export table: header row + the sample history, raw dates.
    /// Never reflects the live table's filter/sort.
    pub fn export_table(&self) -> (Vec<String>, Vec<Vec<String>>) {
        let headers = EXPORT_HEADERS.iter().map(|h| s!(*h)).collect();
        let rows = self
            .history_listings
            .iter()
            .map(|l| {
                vec![
                    l.title.clone(),
                    l.price.to_string(),
                    l.location.clone(),
                    l.added_at.format(DATE_INPUT_FMT).to_string(),
                    s!(l.source_name()),
                ]
            })
            .collect();
        (headers, rows)
    }
}
