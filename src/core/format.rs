// src/core/format.rs
// Display formatting shared by the GUI, the renderer and the CLI.

use chrono::NaiveDateTime;

use crate::config::consts::DATE_DISPLAY_FMT;

/// en-GB date + time: `04/08/2025, 10:45`
pub fn format_date(ts: &NaiveDateTime) -> String {
    ts.format(DATE_DISPLAY_FMT).to_string()
}

pub fn format_price(price: i32) -> String {
    euro!(price)
}

/// Split a `"HH:MM - message"` log line. Lines without the separator
/// come back with an empty time.
pub fn split_log_line(line: &str) -> (&str, &str) {
    match line.split_once(" - ") {
        Some((time, msg)) => (time.trim(), msg.trim()),
        None => ("", line.trim()),
    }
}
