// src/data.rs
//
// Listing table controller.
//
// - ListingTable: owns the canonical listings (read-only after construction)
//                 plus the derived row state: display order + visibility.
// - filter() only flips visibility; sort() only reorders. Neither touches the
//   other's state, so they commute, and both are idempotent.
//
// Rows are recomputed in place, never diffed.

use std::fmt;
use std::str::FromStr;

use crate::core::{collate, format_date, format_price};
use crate::store::Listing;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Descending numeric
    Price,
    /// Ascending, collated
    Location,
    /// Most recent first
    #[default]
    Date,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Date, SortKey::Price, SortKey::Location];

    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Location => "location",
            SortKey::Date => "date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Price => "Price (high → low)",
            SortKey::Location => "Location (A → Z)",
            SortKey::Date => "Date (newest first)",
        }
    }

    /// Unrecognized keys fall back to the default (date).
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "price" => SortKey::Price,
            "location" => SortKey::Location,
            "date" => SortKey::Date,
            other => {
                logd!("Table: Unknown sort key {:?}, using date", other);
                SortKey::Date
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::from_name(s))
    }
}

/// Derived view state for one listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    /// Position of the listing in the canonical list
    pub ix: usize,
    /// Lower-cased concatenation of the row's visible cells
    text: String,
    pub visible: bool,
}

/// Cells a row shows, in column order (the "View" link is not text).
pub fn visible_cells(l: &Listing) -> [String; 5] {
    [
        l.title.clone(),
        format_price(l.price),
        l.location.clone(),
        format_date(&l.added_at),
        s!(l.source_name()),
    ]
}

#[derive(Clone, Debug)]
pub struct ListingTable {
    listings: Vec<Listing>,
    rows: Vec<TableRow>,
    filter: String,
    sort: SortKey,
}

impl ListingTable {
    /// All rows visible, default (date) order.
    pub fn new(listings: &[Listing]) -> Self {
        let rows = listings
            .iter()
            .enumerate()
            .map(|(ix, l)| TableRow {
                ix,
                text: visible_cells(l).join(" ").to_lowercase(),
                visible: true,
            })
            .collect();

        let mut table = Self {
            listings: listings.to_vec(),
            rows,
            filter: s!(),
            sort: SortKey::default(),
        };
        table.sort(SortKey::default());
        table
    }

    /// Hide rows whose visible text lacks `term` (case-insensitive).
    /// Empty term shows everything.
    pub fn filter(&mut self, term: &str) {
        let needle = term.to_lowercase();
        for row in &mut self.rows {
            row.visible = needle.is_empty() || row.text.contains(&needle);
        }
        self.filter = s!(term);
        logd!("Table: filter {:?} → {}/{} visible", term, self.visible_count(), self.rows.len());
    }

    /// Reorder all rows; ties keep canonical order.
    pub fn sort(&mut self, key: SortKey) {
        let listings = &self.listings;
        self.rows.sort_by(|a, b| {
            let (la, lb) = (&listings[a.ix], &listings[b.ix]);
            let primary = match key {
                SortKey::Price => lb.price.cmp(&la.price),
                SortKey::Location => collate::compare(&la.location, &lb.location),
                SortKey::Date => lb.added_at.cmp(&la.added_at),
            };
            primary.then_with(|| a.ix.cmp(&b.ix))
        });
        self.sort = key;
        logd!("Table: sort by {}", key);
    }

    pub fn sort_by_name(&mut self, name: &str) {
        self.sort(SortKey::from_name(name));
    }

    pub fn current_filter(&self) -> &str { &self.filter }
    pub fn current_sort(&self) -> SortKey { self.sort }

    /// Row state in display order (hidden rows included).
    pub fn rows(&self) -> &[TableRow] { &self.rows }

    /// Visible listings in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Listing> + '_ {
        self.rows
            .iter()
            .filter(|r| r.visible)
            .map(move |r| &self.listings[r.ix])
    }

    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| r.visible).count()
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

impl PartialEq for ListingTable {
    /// Observable state: display order + visibility.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}
