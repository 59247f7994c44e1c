//! Filter option enumeration — what the selectors offer the user.
//!
//! The engine itself never sees the "All" sentinel; the UIs prepend it to the
//! optional selectors and map it back to `None` before building criteria.

use std::collections::BTreeSet;

use crate::data::dataset::Dataset;
use crate::domain::{Weekday, MODEL_VOCABULARY};

/// Sentinel shown by the UIs for "no constraint" on an optional filter.
pub const ALL_SENTINEL: &str = "All";

/// Sorted, deduplicated distinct values per filterable column of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub start_points: Vec<String>,
    pub position_types: Vec<String>,
    /// Calendar order, only the days actually present.
    pub weekdays: Vec<Weekday>,
    pub adr_models: Vec<String>,
    pub odr_models: Vec<String>,
    pub rdr_models: Vec<String>,
}

impl FilterOptions {
    /// Enumerate the distinct values present in `dataset`.
    ///
    /// The ADR/ODR lists fall back to the fixed model vocabulary when the
    /// column is entirely absent, so the selectors are never empty.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut start_points = BTreeSet::new();
        let mut position_types = BTreeSet::new();
        let mut weekdays = BTreeSet::new();
        let mut adr_models = BTreeSet::new();
        let mut odr_models = BTreeSet::new();
        let mut rdr_models = BTreeSet::new();

        for row in dataset.rows() {
            start_points.insert(row.start_point.clone());
            position_types.insert(row.position_type.clone());
            if let Some(day) = row.weekday {
                weekdays.insert(day);
            }
            if let Some(m) = &row.adr_model {
                adr_models.insert(m.clone());
            }
            if let Some(m) = &row.odr_model {
                odr_models.insert(m.clone());
            }
            if let Some(m) = &row.rdr_model {
                rdr_models.insert(m.clone());
            }
        }

        Self {
            start_points: start_points.into_iter().collect(),
            position_types: position_types.into_iter().collect(),
            weekdays: weekdays.into_iter().collect(),
            adr_models: or_vocabulary(adr_models),
            odr_models: or_vocabulary(odr_models),
            rdr_models: rdr_models.into_iter().collect(),
        }
    }
}

fn or_vocabulary(found: BTreeSet<String>) -> Vec<String> {
    if found.is_empty() {
        MODEL_VOCABULARY.iter().map(|s| s.to_string()).collect()
    } else {
        found.into_iter().collect()
    }
}
