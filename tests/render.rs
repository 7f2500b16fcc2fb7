// tests/render.rs
//
// View renderer output and mount-point handling.

use turin_watch::config::binder::{transition, ConfigEvent};
use turin_watch::core::{format_date, format_price, split_log_line};
use turin_watch::render::{DashboardView, MountPoint, Mounts, Tone};
use turin_watch::store::Dataset;

fn full() -> (Dataset, DashboardView) {
    let ds = Dataset::sample();
    let view = DashboardView::render(&ds, &ds.default_config(), &Mounts::all());
    (ds, view)
}

#[test]
fn formats_dates_and_prices() {
    let ds = Dataset::sample();
    assert_eq!(format_date(&ds.recent_listings[0].added_at), "04/08/2025, 10:45");
    assert_eq!(format_price(580), "€580");
}

#[test]
fn splits_log_lines_on_the_first_separator() {
    assert_eq!(split_log_line("11:30 - Scraped 45 listings from Idealista"), ("11:30", "Scraped 45 listings from Idealista"));
    assert_eq!(split_log_line("12:00 - a - b"), ("12:00", "a - b"));
    assert_eq!(split_log_line("no separator"), ("", "no separator"));
}

#[test]
fn dashboard_sections() {
    let (_, view) = full();

    let status = view.status.expect("status");
    assert_eq!(status.text, "Monitoring Active");
    assert_eq!(status.tone, Tone::Success);
    assert_eq!(status.last_scan, "04/08/2025, 11:30");

    let stats = view.stats.expect("stats");
    let values: Vec<&str> = stats.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, ["12", "45", "€650", "5"]);

    let recent = view.recent.expect("recent");
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].price, "€580");
    assert_eq!(recent[0].date, "04/08/2025, 10:45");
    assert!(recent.iter().all(|r| r.source.is_none()));

    let logs = view.logs.expect("logs");
    assert_eq!(logs.len(), 4);
    assert_eq!((logs[0].time.as_str(), logs[0].message.as_str()), ("11:30", "Scraped 45 listings from Idealista"));
}

#[test]
fn history_rows_carry_a_source() {
    let (_, view) = full();
    let all = view.all_listings.expect("all listings");
    let sources: Vec<_> = all.iter().filter_map(|r| r.source.as_deref()).collect();
    assert_eq!(sources, ["Idealista", "Idealista", "Idealista", "Cercoaloggio", "Subito"]);
}

#[test]
fn checkboxes_follow_the_config() {
    let (ds, view) = full();
    let locs = view.locations.expect("locations");
    assert_eq!(locs.len(), ds.neighborhoods.len());
    let checked: Vec<&str> = locs.iter().filter(|c| c.checked).map(|c| c.name.as_str()).collect();
    assert_eq!(checked, ["Centro", "Crocetta"]);

    let cfg = transition(
        &ds.default_config(),
        &ConfigEvent::SetLocation { name: "Vanchiglia".into(), checked: true },
        &ds.universe(),
    );
    let view = DashboardView::render(&ds, &cfg, &Mounts::all());
    let checked = view.locations.expect("locations").into_iter().filter(|c| c.checked).count();
    assert_eq!(checked, 3);

    let labels = view.labels.expect("labels");
    assert_eq!((labels.price_min.as_str(), labels.price_max.as_str()), ("€300", "€800"));
    assert_eq!(labels.interval, "30 minutes");
}

#[test]
fn missing_mount_points_are_skipped() {
    let ds = Dataset::sample();
    let mounts = Mounts::only(&[MountPoint::Statistics, MountPoint::SystemLogs]);
    let view = DashboardView::render(&ds, &ds.default_config(), &mounts);

    assert!(view.stats.is_some());
    assert!(view.logs.is_some());
    assert!(view.status.is_none());
    assert!(view.recent.is_none());
    assert!(view.locations.is_none());
    assert!(view.all_listings.is_none());

    let none = DashboardView::render(&ds, &ds.default_config(), &Mounts::only(&[]));
    assert_eq!(none, DashboardView::default());
}

#[test]
fn rendering_is_idempotent() {
    let (ds, first) = full();
    let second = DashboardView::render(&ds, &ds.default_config(), &Mounts::all());
    assert_eq!(first, second);
}
