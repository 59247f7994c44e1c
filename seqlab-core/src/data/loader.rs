//! CSV loader — turns an instrument export into a [`Dataset`].
//!
//! Loading rules, matching the upstream spreadsheet exports:
//! - `banner_rows` non-header lines are skipped before the header.
//! - The header's field count must match the instrument layout; names are
//!   overridden positionally (the exports carry duplicated/mistyped names).
//! - Data rows missing any required field (start point, position type, end
//!   point session) or with an unparsable date are dropped and counted in
//!   `Dataset::skipped_rows`.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use crate::data::catalog::Instrument;
use crate::data::dataset::Dataset;
use crate::data::schema::{validate_header, ColumnLayout};
use crate::domain::{SequenceRow, Weekday};

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("header mismatch: {0}")]
    Header(String),

    #[error("no data rows survived loading (all rows incomplete or file empty)")]
    Empty,
}

/// Load a dataset from a CSV export.
pub fn load_dataset(path: &Path, instrument: Instrument) -> Result<Dataset, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_reader(file, instrument)
}

/// Load a dataset from any reader. Split out so tests can feed strings.
pub fn load_from_reader<R: std::io::Read>(
    reader: R,
    instrument: Instrument,
) -> Result<Dataset, DataError> {
    let layout = instrument.layout();

    // has_headers(false) + flexible(true): the banner line (when present) has
    // an arbitrary field count, so header handling is done by hand.
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = csv_reader.records();

    for _ in 0..layout.banner_rows {
        match records.next() {
            Some(rec) => {
                rec?;
            }
            None => return Err(DataError::Empty),
        }
    }

    let header = match records.next() {
        Some(rec) => rec?,
        None => return Err(DataError::Empty),
    };
    let validation = validate_header(layout, header.len());
    if !validation.is_valid {
        return Err(DataError::Header(validation.errors.join("; ")));
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in records {
        let record = record?;
        match parse_record(&record, layout) {
            Some(row) => rows.push(row),
            None => skipped += 1,
        }
    }

    if rows.is_empty() {
        return Err(DataError::Empty);
    }

    Ok(Dataset::new(instrument, rows, skipped))
}

/// Parse one data record. Returns `None` for rows the loader drops.
fn parse_record(record: &StringRecord, layout: &ColumnLayout) -> Option<SequenceRow> {
    if record.len() != layout.column_count() {
        return None;
    }

    let date = parse_date(cell(record, layout.date)?)?;
    let weekday = cell(record, layout.day).and_then(Weekday::parse);

    let row = SequenceRow {
        date,
        weekday,
        position_type: cell(record, layout.position_type)?.to_string(),
        start_point: cell(record, layout.start_point)?.to_string(),
        end_point_session: cell(record, layout.end_point_session)?.to_string(),
        adr_model: cell(record, layout.adr_model).map(str::to_string),
        odr_model: cell(record, layout.odr_model).map(str::to_string),
        rdr_model: cell(record, layout.rdr_model).map(str::to_string),
        adr_integrity: cell(record, layout.adr_integrity).map(str::to_string),
        odr_integrity: cell(record, layout.odr_integrity).map(str::to_string),
        model_combination: layout
            .model_combination
            .and_then(|idx| cell(record, idx))
            .map(str::to_string),
    };

    debug_assert!(row.has_required());
    Some(row)
}

/// Trimmed cell content; empty cells become `None`.
fn cell(record: &StringRecord, idx: usize) -> Option<&str> {
    let value = record.get(idx)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The exports mix US-style and ISO dates across years.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}
