// tests/charts.rs
//
// Chart specs and the per-slot mount lifecycle.

use std::cell::Cell;
use std::time::{Duration, Instant};

use turin_watch::charts::{self, ChartKind, ChartSlot, ChartState, parse_hex};
use turin_watch::error::ChartError;
use turin_watch::store::{Dataset, Series};

const DELAY: Duration = Duration::from_millis(200);

#[test]
fn sample_specs_build() {
    let ds = Dataset::sample();

    let trend = charts::price_trend(&ds.price_trend).build().expect("price trend");
    assert_eq!(trend.spec.kind, ChartKind::Line { fill: true });
    assert_eq!(trend.spec.labels.len(), 8);
    assert_eq!(trend.y_floor(), Some(600.0));
    assert_eq!(trend.colour(5), [0x1F, 0xB8, 0xCD]);

    let activity = charts::activity(&ds.activity).build().expect("activity");
    assert_eq!(activity.spec.kind, ChartKind::Bar);
    assert_eq!(activity.spec.values, [8.0, 12.0, 15.0, 10.0, 18.0, 5.0, 3.0]);
    assert_eq!(activity.y_floor(), Some(0.0));
    assert_eq!(activity.colour(1), [0xFF, 0xC1, 0x85]);
}

#[test]
fn invalid_specs_are_rejected() {
    let ds = Dataset::sample();

    let mut spec = charts::price_trend(&ds.price_trend);
    spec.values.pop();
    assert!(matches!(spec.build(), Err(ChartError::LengthMismatch { labels: 8, values: 7, .. })));

    let spec = charts::price_trend(&Series { labels: vec![], values: vec![] });
    assert!(matches!(spec.build(), Err(ChartError::Empty(_))));

    let mut spec = charts::activity(&ds.activity);
    spec.values[2] = f64::NAN;
    assert!(matches!(spec.build(), Err(ChartError::NonFinite { index: 2, .. })));

    let mut spec = charts::activity(&ds.activity);
    spec.colours[0] = "teal".into();
    assert!(matches!(spec.build(), Err(ChartError::BadColour { .. })));
}

#[test]
fn hex_parsing() {
    assert_eq!(parse_hex("#DB4545"), Some([0xDB, 0x45, 0x45]));
    assert_eq!(parse_hex("#db4545"), Some([0xDB, 0x45, 0x45]));
    assert_eq!(parse_hex("DB4545"), None);
    assert_eq!(parse_hex("#DB45"), None);
    assert_eq!(parse_hex("#GG4545"), None);
}

#[test]
fn slot_waits_for_the_settle_delay() {
    let ds = Dataset::sample();
    let t0 = Instant::now();
    let mut slot = ChartSlot::with_delay("trend", DELAY);

    // Not requested: polling does nothing.
    assert!(!slot.poll(t0, || charts::price_trend(&ds.price_trend).build()));
    assert_eq!(slot.state(), &ChartState::Uninitialized);

    slot.request(t0);
    assert_eq!(slot.remaining(t0), Some(DELAY));
    assert!(!slot.poll(t0 + DELAY / 2, || charts::price_trend(&ds.price_trend).build()));
    assert!(matches!(slot.state(), ChartState::Pending { .. }));

    assert!(slot.poll(t0 + DELAY, || charts::price_trend(&ds.price_trend).build()));
    assert!(slot.chart().is_some());
    assert_eq!(slot.remaining(t0 + DELAY), None);
}

#[test]
fn slot_builds_at_most_once() {
    let ds = Dataset::sample();
    let builds = Cell::new(0);
    let t0 = Instant::now();
    let mut slot = ChartSlot::with_delay("activity", DELAY);

    let build = || {
        builds.set(builds.get() + 1);
        charts::activity(&ds.activity).build()
    };

    slot.request(t0);
    slot.poll(t0 + DELAY, build);
    // Re-entering the section re-requests; a mounted slot ignores it.
    slot.request(t0 + DELAY * 3);
    slot.poll(t0 + DELAY * 10, || {
        builds.set(builds.get() + 1);
        charts::activity(&ds.activity).build()
    });

    assert_eq!(builds.get(), 1);
    assert!(slot.chart().is_some());
}

#[test]
fn failed_build_is_terminal() {
    let t0 = Instant::now();
    let mut slot = ChartSlot::with_delay("broken", DELAY);
    slot.request(t0);

    let bad = charts::price_trend(&Series { labels: vec!["Jan".into()], values: vec![] });
    assert!(slot.poll(t0 + DELAY, || bad.build()));
    assert!(matches!(slot.state(), ChartState::Failed(_)));
    assert!(slot.chart().is_none());

    slot.request(t0 + DELAY * 2);
    assert!(matches!(slot.state(), ChartState::Failed(_)));
}
