// src/config/options.rs
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::consts::*;

/// User-editable monitoring settings. Lives inside `AppState`; only
/// `config::binder::transition` produces new values of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonitorConfig {
    pub price: PriceRange,
    pub locations: BTreeSet<String>,
    pub property_types: BTreeSet<String>,
    pub rooms: String,
    pub monitoring_interval: u32,
    pub notification_frequency: NotificationFrequency,
    pub email: String,
    pub websites: BTreeSet<String>,
    pub active_days: BTreeSet<Day>,
}

/// Invariant: `min < max`, both inside `PRICE_FLOOR..=PRICE_CEIL` and on the `PRICE_STEP` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: i32,
    pub max: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFrequency {
    #[default]
    Immediate,
    Hourly,
    Daily,
}

impl NotificationFrequency {
    pub const ALL: [NotificationFrequency; 3] = [Self::Immediate, Self::Hourly, Self::Daily];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::Hourly => "Hourly digest",
            Self::Daily => "Daily digest",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Day { Mon, Tue, Wed, Thu, Fri, Sat, Sun }

impl Day {
    pub const ALL: [Day; 7] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat, Day::Sun];

    pub fn label(&self) -> &'static str {
        match self {
            Day::Mon => "Mon", Day::Tue => "Tue", Day::Wed => "Wed", Day::Thu => "Thu",
            Day::Fri => "Fri", Day::Sat => "Sat", Day::Sun => "Sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(format!("{}.{}", stem, self.format.ext()))
    }

    /// Parse GUI/CLI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    pub fn delimiter(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_EXPORT_STEM),
        }
    }
}
