// src/config/consts.rs
use std::time::Duration;

// Price sliders (€/month)
pub const PRICE_FLOOR: i32 = 200;
pub const PRICE_CEIL: i32 = 1500;
pub const PRICE_STEP: i32 = 10;

// Monitoring interval slider (minutes)
pub const INTERVAL_MIN: u32 = 5;
pub const INTERVAL_MAX: u32 = 120;
pub const INTERVAL_STEP: u32 = 5;

// Listings without an explicit source came from here
pub const DEFAULT_SOURCE: &str = "Idealista";

// Listing timestamps as they appear in the sample data
pub const DATE_INPUT_FMT: &str = "%Y-%m-%d %H:%M";
// en-GB display: 04/08/2025, 10:45
pub const DATE_DISPLAY_FMT: &str = "%d/%m/%Y, %H:%M";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "property_listings";

// Timers
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);
pub const CHART_SETTLE_DELAY: Duration = Duration::from_millis(200);

// Window
pub const APP_TITLE: &str = "Turin Property Monitor";
pub const WINDOW_W: f32 = 1180.0;
pub const WINDOW_H: f32 = 760.0;
