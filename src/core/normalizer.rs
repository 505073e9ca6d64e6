//! Raw sheet rows → typed `WorkRecord`s.
//!
//! A bad cell never fails the batch: timestamps become absent, loads become
//! 0, and rows that cannot be attributed to a pool are dropped.

use crate::models::record::{WorkRecord, sanitize_load};
use crate::utils::time::parse_day_first;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

pub const COL_NAME: &str = "Name";
pub const COL_POOL_NAME: &str = "Pool Name";
pub const COL_TAB: &str = "Tab";
pub const COL_LOAD: &str = "Load";
pub const COL_START: &str = "Start Time";
pub const COL_END: &str = "End Time";
pub const COL_POOL_UP: &str = "Pool Up";

pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_NAME,
    COL_POOL_NAME,
    COL_TAB,
    COL_LOAD,
    COL_START,
    COL_END,
    COL_POOL_UP,
];

/// One untyped row: header → cell text.
///
/// Header lookups ignore case and surrounding whitespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: BTreeMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: &str, value: &str) {
        self.cells.insert(header_key(header), value.to_string());
    }

    pub fn with(mut self, header: &str, value: &str) -> Self {
        self.insert(header, value);
        self
    }

    /// Trimmed, non-empty cell value.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .get(&header_key(header))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k.as_ref(), v.as_ref());
        }
        row
    }
}

pub fn header_key(header: &str) -> String {
    header.trim().to_lowercase()
}

#[derive(Debug, Default)]
pub struct NormalizeReport {
    pub records: Vec<WorkRecord>,
    pub dropped: usize,
}

pub struct Normalizer {
    /// Date used for cells holding only a time of day.
    reference_date: NaiveDate,
}

impl Normalizer {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn normalize(&self, rows: &[RawRow]) -> NormalizeReport {
        let mut report = NormalizeReport::default();

        for (idx, row) in rows.iter().enumerate() {
            match self.normalize_row(row) {
                Some(rec) => report.records.push(rec),
                None => {
                    debug!(row = idx + 1, "dropping row without name, pool name or tab");
                    report.dropped += 1;
                }
            }
        }

        report
    }

    /// `None` when the row lacks an identity field.
    pub fn normalize_row(&self, row: &RawRow) -> Option<WorkRecord> {
        let name = row.get(COL_NAME)?;
        let pool_name = row.get(COL_POOL_NAME)?;
        let pool_tab = row.get(COL_TAB)?;

        let load = row.get(COL_LOAD).map(parse_load).unwrap_or(0.0);

        let start = row
            .get(COL_START)
            .and_then(|s| parse_day_first(s, self.reference_date));
        let end = row
            .get(COL_END)
            .and_then(|s| parse_day_first(s, self.reference_date));
        let pool_up = row
            .get(COL_POOL_UP)
            .and_then(|s| parse_day_first(s, self.reference_date));

        Some(
            WorkRecord::new(name, pool_name, pool_tab, load)
                .with_times(start, end)
                .with_pool_up(pool_up),
        )
    }
}

/// Numeric cell → load; unparseable, negative or non-finite gives 0.
pub fn parse_load(s: &str) -> f64 {
    s.trim().parse::<f64>().map(sanitize_load).unwrap_or(0.0)
}
