//! CSV column-layout contract — the boundary between the raw instrument
//! exports and the loader.
//!
//! The source spreadsheets carry messy headers ("High / Low.1", "Srart Point
//! with session"), so the layout assigns canonical names positionally and the
//! loader validates width, not names. The CL export has one banner line above
//! the header; the ES export does not.

/// Column layout for one instrument's CSV export.
///
/// All `usize` fields are 0-based column indices into a data record.
#[derive(Debug, Clone, Copy)]
pub struct ColumnLayout {
    pub name: &'static str,
    /// Canonical column names, applied positionally.
    pub columns: &'static [&'static str],
    /// Non-header lines above the header row.
    pub banner_rows: usize,
    pub date: usize,
    pub day: usize,
    pub position_type: usize,
    pub start_point: usize,
    pub end_point_session: usize,
    pub adr_model: usize,
    pub adr_integrity: usize,
    pub odr_model: usize,
    pub odr_integrity: usize,
    pub rdr_model: usize,
    /// Only the CL export carries a "Model Combinations" column.
    pub model_combination: Option<usize>,
}

impl ColumnLayout {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// CL export: 14 columns, one banner line above the header.
pub const CL_LAYOUT: ColumnLayout = ColumnLayout {
    name: "CL",
    columns: &[
        "Date",
        "Day",
        "High / Low",
        "High / Low 2",
        "Start Point",
        "End Point",
        "ADR Model",
        "ADR Integrity",
        "ODR Model",
        "ODR Integrity",
        "RDR Model",
        "Start Point Session",
        "End Point Session",
        "Model Combinations",
    ],
    banner_rows: 1,
    date: 0,
    day: 1,
    position_type: 2,
    start_point: 4,
    end_point_session: 12,
    adr_model: 6,
    adr_integrity: 7,
    odr_model: 8,
    odr_integrity: 9,
    rdr_model: 10,
    model_combination: Some(13),
};

/// ES export: 15 columns, header on the first line.
pub const ES_LAYOUT: ColumnLayout = ColumnLayout {
    name: "ES",
    columns: &[
        "Date",
        "Day",
        "High / Low",
        "High / Low 2",
        "Start Point",
        "End Point",
        "ADR Model",
        "ADR Integrity",
        "ODR Model",
        "ODR Integrity",
        "RDR Model",
        "ODR Broke ADR",
        "TRN Broke ADR",
        "Start Point Session",
        "End Point Session",
    ],
    banner_rows: 0,
    date: 0,
    day: 1,
    position_type: 2,
    start_point: 4,
    end_point_session: 14,
    adr_model: 6,
    adr_integrity: 7,
    odr_model: 8,
    odr_integrity: 9,
    rdr_model: 10,
    model_combination: None,
};

/// Result of validating a header record against a layout.
#[derive(Debug, Clone)]
pub struct LayoutValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Validate a header's field count against the layout.
///
/// Names are not checked: the layout overrides them positionally.
pub fn validate_header(layout: &ColumnLayout, found_fields: usize) -> LayoutValidation {
    let mut errors = Vec::new();
    if found_fields != layout.column_count() {
        errors.push(format!(
            "layout '{}': expected {} columns, found {}",
            layout.name,
            layout.column_count(),
            found_fields
        ));
    }
    LayoutValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
