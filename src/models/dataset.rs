use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PriceRecord;

/// Min/max trading day present in the snapshot. The dashboard shell uses
/// this to seed its date picker, defaulting the selection to the full range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateBounds {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

/// The prepared snapshot: rows sorted by `(timestamp, session)` with the
/// date bounds precomputed. Immutable once built; every user interaction
/// filters it into a fresh view and leaves the source rows untouched.
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    records: Vec<PriceRecord>,
    bounds: Option<DateBounds>,
}

impl PreparedDataset {
    pub fn from_records(mut records: Vec<PriceRecord>) -> Self {
        records.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.session.cmp(&b.session))
        });

        let bounds = match (
            records.iter().map(|r| r.date).min(),
            records.iter().map(|r| r.date).max(),
        ) {
            (Some(min_date), Some(max_date)) => Some(DateBounds { min_date, max_date }),
            _ => None,
        };

        Self { records, bounds }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn bounds(&self) -> Option<DateBounds> {
        self.bounds
    }

    /// Inclusive date-range filter, compared on the trading day (`date`),
    /// not on the derived `timestamp`. An inverted range yields an empty
    /// view rather than an error.
    pub fn filter_by_date(&self, start: NaiveDate, end: NaiveDate) -> Vec<PriceRecord> {
        self.records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect()
    }
}
