// tests/toast.rs
use std::time::{Duration, Instant};

use turin_watch::config::consts::TOAST_DURATION;
use turin_watch::toast::{Toast, ToastKind};

#[test]
fn toast_expires_after_its_duration() {
    let t0 = Instant::now();
    let toast = Toast::success("Configuration saved successfully!", t0);
    assert_eq!(toast.kind, ToastKind::Success);

    assert!(!toast.is_expired(t0));
    assert_eq!(toast.remaining(t0), TOAST_DURATION);
    assert!(!toast.is_expired(t0 + TOAST_DURATION - Duration::from_millis(1)));
    assert!(toast.is_expired(t0 + TOAST_DURATION));
    assert_eq!(toast.remaining(t0 + TOAST_DURATION * 2), Duration::ZERO);
}

#[test]
fn toast_kinds() {
    let now = Instant::now();
    assert_eq!(Toast::info("Copied to clipboard", now).kind, ToastKind::Info);
    assert_eq!(Toast::error("Export error", now).kind, ToastKind::Error);
}
