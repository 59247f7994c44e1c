//! Row-selection predicate — conjunction of the active criteria filters.

use crate::data::dataset::Dataset;
use crate::domain::SequenceRow;
use crate::query::criteria::FilterCriteria;

/// Does `row` satisfy every active filter in `criteria`?
///
/// Required fields match by exact equality. Optional fields pass every row
/// when unset. A row with a missing optional attribute never matches an
/// active filter on that attribute.
pub fn matches(criteria: &FilterCriteria, row: &SequenceRow) -> bool {
    if row.start_point != criteria.start_point() {
        return false;
    }
    if row.position_type != criteria.position_type() {
        return false;
    }
    if let Some(day) = criteria.weekday() {
        if row.weekday != Some(day) {
            return false;
        }
    }
    if let Some(model) = criteria.adr_model() {
        if row.adr_model.as_deref() != Some(model) {
            return false;
        }
    }
    if let Some(model) = criteria.odr_model() {
        if row.odr_model.as_deref() != Some(model) {
            return false;
        }
    }
    true
}

/// Select the rows satisfying `criteria`, preserving dataset order.
///
/// Order preservation is a contract: downstream ranking breaks count ties by
/// first encounter.
pub fn filter_rows<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a SequenceRow> {
    dataset
        .rows()
        .iter()
        .filter(|row| matches(criteria, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::Instrument;
    use crate::domain::Weekday;
    use chrono::NaiveDate;

    fn row(
        start: &str,
        position: &str,
        day: Option<Weekday>,
        adr: Option<&str>,
        odr: Option<&str>,
    ) -> SequenceRow {
        SequenceRow {
            date: NaiveDate::from_ymd_opt(2022, 3, 8).unwrap(),
            weekday: day,
            position_type: position.into(),
            start_point: start.into(),
            end_point_session: "RDR_London".into(),
            adr_model: adr.map(str::to_string),
            odr_model: odr.map(str::to_string),
            rdr_model: None,
            adr_integrity: None,
            odr_integrity: None,
            model_combination: None,
        }
    }

    fn base_criteria() -> FilterCriteria {
        FilterCriteria::builder()
            .start_point("OpenHigh")
            .position_type("High/Asia")
            .build()
            .unwrap()
    }

    #[test]
    fn required_fields_match_exactly() {
        let criteria = base_criteria();
        assert!(matches(
            &criteria,
            &row("OpenHigh", "High/Asia", None, None, None)
        ));
        assert!(!matches(
            &criteria,
            &row("OpenLow", "High/Asia", None, None, None)
        ));
        assert!(!matches(
            &criteria,
            &row("OpenHigh", "Low/Asia", None, None, None)
        ));
        // Equality is exact, not prefix or case-insensitive.
        assert!(!matches(
            &criteria,
            &row("openhigh", "High/Asia", None, None, None)
        ));
    }

    #[test]
    fn unset_optional_filters_pass_all() {
        let criteria = base_criteria();
        assert!(matches(
            &criteria,
            &row(
                "OpenHigh",
                "High/Asia",
                Some(Weekday::Friday),
                Some("UX"),
                Some("D")
            )
        ));
    }

    #[test]
    fn active_weekday_filter_excludes_missing_weekday() {
        let criteria = FilterCriteria::builder()
            .start_point("OpenHigh")
            .position_type("High/Asia")
            .weekday(Some(Weekday::Tuesday))
            .build()
            .unwrap();

        assert!(matches(
            &criteria,
            &row("OpenHigh", "High/Asia", Some(Weekday::Tuesday), None, None)
        ));
        assert!(!matches(
            &criteria,
            &row("OpenHigh", "High/Asia", Some(Weekday::Monday), None, None)
        ));
        // Missing weekday never satisfies an active day filter.
        assert!(!matches(
            &criteria,
            &row("OpenHigh", "High/Asia", None, None, None)
        ));
    }

    #[test]
    fn all_active_filters_are_conjoined() {
        let criteria = FilterCriteria::builder()
            .start_point("OpenHigh")
            .position_type("High/Asia")
            .adr_model(Some("UX"))
            .odr_model(Some("D"))
            .build()
            .unwrap();

        assert!(matches(
            &criteria,
            &row("OpenHigh", "High/Asia", None, Some("UX"), Some("D"))
        ));
        // One failing conjunct rejects the row.
        assert!(!matches(
            &criteria,
            &row("OpenHigh", "High/Asia", None, Some("UX"), Some("DX"))
        ));
        assert!(!matches(
            &criteria,
            &row("OpenHigh", "High/Asia", None, None, Some("D"))
        ));
    }

    #[test]
    fn filter_preserves_dataset_order() {
        let rows = vec![
            row("OpenHigh", "High/Asia", Some(Weekday::Monday), None, None),
            row("OpenLow", "Low/Asia", Some(Weekday::Monday), None, None),
            row("OpenHigh", "High/Asia", Some(Weekday::Tuesday), None, None),
            row("OpenHigh", "High/Asia", Some(Weekday::Friday), None, None),
        ];
        let ds = Dataset::new(Instrument::Es, rows, 0);

        let selected = filter_rows(&ds, &base_criteria());
        let days: Vec<_> = selected.iter().map(|r| r.weekday.unwrap()).collect();
        assert_eq!(
            days,
            vec![Weekday::Monday, Weekday::Tuesday, Weekday::Friday]
        );
    }

    #[test]
    fn no_match_yields_empty_subset() {
        let ds = Dataset::new(
            Instrument::Es,
            vec![row("OpenLow", "Low/Asia", None, None, None)],
            0,
        );
        assert!(filter_rows(&ds, &base_criteria()).is_empty());
    }
}
