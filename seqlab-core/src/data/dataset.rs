//! Dataset — the immutable in-memory table the query engine runs over.

use crate::data::catalog::Instrument;
use crate::domain::SequenceRow;

/// An ordered, read-only collection of sequence rows with provenance.
///
/// Row order is the original CSV order; the engine relies on it for stable
/// tie-breaking and never mutates or removes a row after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    instrument: Instrument,
    rows: Vec<SequenceRow>,
    fingerprint: String,
    skipped_rows: usize,
}

impl Dataset {
    /// Build a dataset from already-cleaned rows.
    ///
    /// `skipped_rows` is the number of source rows the loader dropped for
    /// missing required fields. The fingerprint is a BLAKE3 hash over every
    /// row field in order, so two loads of the same file agree.
    pub fn new(instrument: Instrument, rows: Vec<SequenceRow>, skipped_rows: usize) -> Self {
        let fingerprint = fingerprint_rows(&rows);
        Self {
            instrument,
            rows,
            fingerprint,
            skipped_rows,
        }
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn rows(&self) -> &[SequenceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

/// BLAKE3 over all row fields in row order.
///
/// Fields are separated by 0x1f and rows by 0x1e so that adjacent values
/// cannot collide across boundaries.
fn fingerprint_rows(rows: &[SequenceRow]) -> String {
    let mut hasher = blake3::Hasher::new();
    for row in rows {
        hasher.update(row.date.to_string().as_bytes());
        hasher.update(&[0x1f]);
        hasher.update(row.weekday.map(|d| d.as_str()).unwrap_or("").as_bytes());
        hasher.update(&[0x1f]);
        for field in [
            Some(row.position_type.as_str()),
            Some(row.start_point.as_str()),
            Some(row.end_point_session.as_str()),
            row.adr_model.as_deref(),
            row.odr_model.as_deref(),
            row.rdr_model.as_deref(),
            row.adr_integrity.as_deref(),
            row.odr_integrity.as_deref(),
            row.model_combination.as_deref(),
        ] {
            hasher.update(field.unwrap_or("").as_bytes());
            hasher.update(&[0x1f]);
        }
        hasher.update(&[0x1e]);
    }
    hasher.finalize().to_hex().to_string()
}
