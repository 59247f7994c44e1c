//! SequenceRow — one historical daily-price-sequence observation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::weekday::Weekday;

/// A single observed sequence instance, as loaded from an instrument CSV.
///
/// Required label fields (`start_point`, `position_type`,
/// `end_point_session`) are guaranteed non-empty for every row that survives
/// loading; rows missing any of them are dropped and counted by the loader.
/// The model columns are optional — absent cells load as `None` and are
/// excluded from co-occurrence candidacy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceRow {
    pub date: NaiveDate,
    pub weekday: Option<Weekday>,
    /// Extremum + session label, e.g. "High/Asia" (CSV "High / Low").
    pub position_type: String,
    /// Named price-action anchor, may encode color metadata.
    pub start_point: String,
    /// The outcome label: where/when the sequence resolved.
    pub end_point_session: String,
    pub adr_model: Option<String>,
    pub odr_model: Option<String>,
    /// The co-occurrence attribute ranked per outcome group.
    pub rdr_model: Option<String>,
    pub adr_integrity: Option<String>,
    pub odr_integrity: Option<String>,
    /// Only present in the CL column layout.
    pub model_combination: Option<String>,
}

impl SequenceRow {
    /// Returns true when every required label field is non-empty.
    ///
    /// The loader drops rows failing this check, mirroring the upstream
    /// data-cleaning rule that incomplete rows never reach the engine.
    pub fn has_required(&self) -> bool {
        !self.start_point.is_empty()
            && !self.position_type.is_empty()
            && !self.end_point_session.is_empty()
    }
}
