// src/charts.rs
//! Declarative chart contract + per-mount lifecycle.
//!
//! A `ChartSpec` says *what* to draw (labels, values, colours, axis hints).
//! The painter (egui_plot, see `gui::components::chart_view`) only ever sees
//! a validated `Chart`.
//!
//! Each mount point owns a `ChartSlot`:
//!
//! ```text
//! Uninitialized --request--> Pending{since} --poll, delay elapsed--> Mounted(Chart)
//!                                                       \--build error--> Failed(reason)
//! ```
//!
//! Mounted and Failed are terminal, so a chart is built at most once per session.

use std::time::{Duration, Instant};

use crate::config::consts::CHART_SETTLE_DELAY;
use crate::error::ChartError;
use crate::store::Series;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartKind {
    Line { fill: bool },
    Bar,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct YAxis {
    pub min: Option<f64>,
    pub begin_at_zero: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    /// Series name (tooltip/legend)
    pub series_label: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// `#RRGGBB`; one colour for the whole series or one per value
    pub colours: Vec<String>,
    pub y_axis: YAxis,
    pub legend: bool,
}

/// A spec that passed validation, with colours decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub spec: ChartSpec,
    pub rgb: Vec<[u8; 3]>,
}

impl Chart {
    /// Colour for value `i`; single-colour specs reuse the first.
    pub fn colour(&self, i: usize) -> [u8; 3] {
        self.rgb.get(i).or_else(|| self.rgb.first()).copied().unwrap_or([0x1F, 0xB8, 0xCD])
    }

    /// Lower bound the y axis should include.
    pub fn y_floor(&self) -> Option<f64> {
        match (self.spec.y_axis.min, self.spec.y_axis.begin_at_zero) {
            (Some(min), _) => Some(min),
            (None, true) => Some(0.0),
            (None, false) => None,
        }
    }
}

impl ChartSpec {
    pub fn build(self) -> Result<Chart, ChartError> {
        if self.values.is_empty() || self.labels.is_empty() {
            return Err(ChartError::Empty(self.title));
        }
        if self.labels.len() != self.values.len() {
            return Err(ChartError::LengthMismatch {
                title: self.title,
                labels: self.labels.len(),
                values: self.values.len(),
            });
        }
        if let Some(index) = self.values.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::NonFinite { title: self.title, index });
        }

        let mut rgb = Vec::with_capacity(self.colours.len());
        for c in &self.colours {
            match parse_hex(c) {
                Some(px) => rgb.push(px),
                None => {
                    return Err(ChartError::BadColour { title: self.title.clone(), colour: c.clone() });
                }
            }
        }

        Ok(Chart { spec: self, rgb })
    }
}

/// `#1FB8CD` → [0x1F, 0xB8, 0xCD]
pub fn parse_hex(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?])
}

/* ---------------- Sample specs ---------------- */

pub fn price_trend(series: &Series) -> ChartSpec {
    ChartSpec {
        title: s!("Price Trends"),
        series_label: s!("Average Price (€)"),
        kind: ChartKind::Line { fill: true },
        labels: series.labels.clone(),
        values: series.values.clone(),
        colours: vec![s!("#1FB8CD")],
        y_axis: YAxis { min: Some(600.0), begin_at_zero: false },
        legend: false,
    }
}

pub fn activity(series: &Series) -> ChartSpec {
    ChartSpec {
        title: s!("Weekly Activity"),
        series_label: s!("New Listings"),
        kind: ChartKind::Bar,
        labels: series.labels.clone(),
        values: series.values.clone(),
        colours: ["#1FB8CD", "#FFC185", "#B4413C", "#ECEBD5", "#5D878F", "#DB4545", "#D2BA4C"]
            .iter()
            .map(|c| s!(*c))
            .collect(),
        y_axis: YAxis { min: None, begin_at_zero: true },
        legend: false,
    }
}

/* ---------------- Lifecycle ---------------- */

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ChartState {
    #[default]
    Uninitialized,
    Pending { since: Instant },
    Mounted(Chart),
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct ChartSlot {
    name: &'static str,
    delay: Duration,
    state: ChartState,
}

impl ChartSlot {
    pub fn new(name: &'static str) -> Self {
        Self::with_delay(name, CHART_SETTLE_DELAY)
    }

    pub fn with_delay(name: &'static str, delay: Duration) -> Self {
        Self { name, delay, state: ChartState::Uninitialized }
    }

    pub fn state(&self) -> &ChartState { &self.state }

    pub fn chart(&self) -> Option<&Chart> {
        match &self.state {
            ChartState::Mounted(c) => Some(c),
            _ => None,
        }
    }

    /// Arm the slot. Anything past Uninitialized is left alone.
    pub fn request(&mut self, now: Instant) {
        if self.state == ChartState::Uninitialized {
            logd!("Chart: {} pending", self.name);
            self.state = ChartState::Pending { since: now };
        }
    }

    /// Time left before a pending slot may mount.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            ChartState::Pending { since } => Some(self.delay.saturating_sub(now.saturating_duration_since(since))),
            _ => None,
        }
    }

    /// Mount once the settle delay has passed. `build` runs at most once per slot.
    /// Returns true if the state changed.
    pub fn poll<F>(&mut self, now: Instant, build: F) -> bool
    where
        F: FnOnce() -> Result<Chart, ChartError>,
    {
        let ChartState::Pending { since } = self.state else { return false };
        if now.saturating_duration_since(since) < self.delay {
            return false;
        }

        self.state = match build() {
            Ok(chart) => {
                logf!("Chart: {} mounted ({} points)", self.name, chart.spec.values.len());
                ChartState::Mounted(chart)
            }
            Err(e) => {
                loge!("Chart: {} failed: {}", self.name, e);
                ChartState::Failed(e.to_string())
            }
        };
        true
    }
}
