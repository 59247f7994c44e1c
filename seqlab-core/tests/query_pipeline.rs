//! End-to-end pipeline tests: CSV text → dataset → scenarios → comparison.

use seqlab_core::data::{load_from_reader, Dataset, Instrument};
use seqlab_core::domain::SequenceRow;
use seqlab_core::query::{compare, run_scenario, FilterCriteria};
use chrono::NaiveDate;

const HEADER: &str = "Date,Day,High / Low,High / Low 2,Start Point,End Point,ADR Model,ADR Integrity,ODR Model,ODR Integrity,RDR Model,ODR Broke ADR,TRN Broke ADR,Start Point Session,End Point Session";

fn es_line(day: &str, position: &str, start: &str, rdr: &str, end: &str) -> String {
    format!("01/03/2022,{day},{position},Low/NY,{start},MaxLow,UX,Intact,D,Broken,{rdr},Yes,No,Asia,{end}")
}

fn build_csv(lines: &[String]) -> String {
    let mut out = String::from(HEADER);
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out.push('\n');
    out
}

fn criteria(start: &str, position: &str) -> FilterCriteria {
    FilterCriteria::builder()
        .start_point(start)
        .position_type(position)
        .build()
        .unwrap()
}

/// The worked example: 10 matching rows, 6 London / 4 NY → 60% / 40%.
#[test]
fn worked_example_sixty_forty() {
    let mut lines = Vec::new();
    for _ in 0..6 {
        lines.push(es_line("Monday", "High/Asia", "OpenHigh", "RC", "RDR_London"));
    }
    for _ in 0..4 {
        lines.push(es_line("Monday", "High/Asia", "OpenHigh", "UX", "RDR_NY"));
    }
    // Noise that must not match.
    lines.push(es_line("Monday", "Low/Asia", "OpenLow", "RC", "RDR_London"));

    let csv = build_csv(&lines);
    let dataset = load_from_reader(csv.as_bytes(), Instrument::Es).unwrap();

    let report = run_scenario(&dataset, &criteria("OpenHigh", "High/Asia")).unwrap();

    assert_eq!(report.total_count, 10);
    assert_eq!(report.outcomes.len(), 2);

    assert_eq!(report.outcomes[0].stat.end_point_session, "RDR_London");
    assert_eq!(report.outcomes[0].stat.count, 6);
    assert_eq!(report.outcomes[0].stat.percentage, 60.0);

    assert_eq!(report.outcomes[1].stat.end_point_session, "RDR_NY");
    assert_eq!(report.outcomes[1].stat.count, 4);
    assert_eq!(report.outcomes[1].stat.percentage, 40.0);
}

/// Comparison example: totals 10 and 30 → 25% / 75%.
#[test]
fn comparison_example_quarter_three_quarters() {
    let mut lines = Vec::new();
    for _ in 0..10 {
        lines.push(es_line("Monday", "High/Asia", "OpenHigh", "RC", "RDR_London"));
    }
    for _ in 0..30 {
        lines.push(es_line("Tuesday", "Low/Asia", "OpenLow", "UX", "RDR_NY"));
    }

    let csv = build_csv(&lines);
    let dataset = load_from_reader(csv.as_bytes(), Instrument::Es).unwrap();

    let report1 = run_scenario(&dataset, &criteria("OpenHigh", "High/Asia")).unwrap();
    let report2 = run_scenario(&dataset, &criteria("OpenLow", "Low/Asia")).unwrap();

    assert_eq!(report1.total_count, 10);
    assert_eq!(report2.total_count, 30);

    let cmp = compare(report1.total_count, report2.total_count).unwrap();
    assert_eq!(cmp.share1, 25.0);
    assert_eq!(cmp.share2, 75.0);
}

/// Tie example: an outcome group with RDR models [X, Y, X, Y] surfaces both.
#[test]
fn co_occurrence_ties_surface_both_models() {
    let lines = vec![
        es_line("Monday", "High/Asia", "OpenHigh", "UX", "RDR_London"),
        es_line("Monday", "High/Asia", "OpenHigh", "RC", "RDR_London"),
        es_line("Monday", "High/Asia", "OpenHigh", "UX", "RDR_London"),
        es_line("Monday", "High/Asia", "OpenHigh", "RC", "RDR_London"),
    ];

    let csv = build_csv(&lines);
    let dataset = load_from_reader(csv.as_bytes(), Instrument::Es).unwrap();

    let report = run_scenario(&dataset, &criteria("OpenHigh", "High/Asia")).unwrap();
    assert_eq!(report.outcomes.len(), 1);

    let top = &report.outcomes[0].top_rdr;
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].model, "UX");
    assert_eq!(top[0].count, 2);
    assert_eq!(top[1].model, "RC");
    assert_eq!(top[1].count, 2);
}

/// Two scenarios run over one dataset without interfering; a scenario with
/// no matches makes the comparison unavailable.
#[test]
fn empty_scenario_disables_comparison() {
    let lines = vec![es_line("Monday", "High/Asia", "OpenHigh", "RC", "RDR_London")];
    let csv = build_csv(&lines);
    let dataset = load_from_reader(csv.as_bytes(), Instrument::Es).unwrap();

    let report1 = run_scenario(&dataset, &criteria("OpenHigh", "High/Asia"));
    let report2 = run_scenario(&dataset, &criteria("OpenLow", "Low/Asia"));

    assert!(report1.is_some());
    assert!(report2.is_none());

    let total2 = report2.map(|r| r.total_count).unwrap_or(0);
    assert_eq!(compare(report1.unwrap().total_count, total2), None);
}

/// Weekday and model filters compose: narrowing criteria shrink the subset.
#[test]
fn optional_filters_narrow_the_subset() {
    let lines = vec![
        es_line("Monday", "High/Asia", "OpenHigh", "RC", "RDR_London"),
        es_line("Tuesday", "High/Asia", "OpenHigh", "RC", "RDR_London"),
        es_line("Tuesday", "High/Asia", "OpenHigh", "RC", "RDR_NY"),
    ];
    let csv = build_csv(&lines);
    let dataset = load_from_reader(csv.as_bytes(), Instrument::Es).unwrap();

    let broad = run_scenario(&dataset, &criteria("OpenHigh", "High/Asia")).unwrap();
    assert_eq!(broad.total_count, 3);

    let narrow_criteria = FilterCriteria::builder()
        .start_point("OpenHigh")
        .position_type("High/Asia")
        .weekday(Some(seqlab_core::domain::Weekday::Tuesday))
        .build()
        .unwrap();
    let narrow = run_scenario(&dataset, &narrow_criteria).unwrap();
    assert_eq!(narrow.total_count, 2);

    // ADR filter on top excludes everything (rows carry ADR "UX").
    let narrower_criteria = FilterCriteria::builder()
        .start_point("OpenHigh")
        .position_type("High/Asia")
        .adr_model(Some("RX"))
        .build()
        .unwrap();
    assert!(run_scenario(&dataset, &narrower_criteria).is_none());
}

/// The engine never mutates the dataset: repeated runs see identical rows.
#[test]
fn dataset_is_read_only_across_runs() {
    fn row(start: &str, end: &str) -> SequenceRow {
        SequenceRow {
            date: NaiveDate::from_ymd_opt(2022, 3, 8).unwrap(),
            weekday: None,
            position_type: "High/Asia".into(),
            start_point: start.into(),
            end_point_session: end.into(),
            adr_model: None,
            odr_model: None,
            rdr_model: Some("RC".into()),
            adr_integrity: None,
            odr_integrity: None,
            model_combination: None,
        }
    }

    let dataset = Dataset::new(
        Instrument::Cl,
        vec![row("OpenHigh", "RDR_London"), row("OpenHigh", "RDR_NY")],
        0,
    );
    let before = dataset.fingerprint().to_string();

    let c = criteria("OpenHigh", "High/Asia");
    for _ in 0..3 {
        let report = run_scenario(&dataset, &c).unwrap();
        assert_eq!(report.total_count, 2);
    }

    assert_eq!(dataset.fingerprint(), before);
    assert_eq!(dataset.len(), 2);
}
