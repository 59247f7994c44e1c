//! Property tests for query-engine invariants.
//!
//! Uses proptest to verify:
//! 1. Count conservation — outcome counts sum to the filtered subset size
//! 2. Ranking order — counts descend; equal counts keep first-encounter order
//! 3. Tie completeness — every value at the maximum frequency is surfaced
//! 4. Idempotence — aggregate/rank are pure functions of their input

use proptest::prelude::*;
use chrono::NaiveDate;

use seqlab_core::domain::SequenceRow;
use seqlab_core::query::{aggregate, rank_rdr};

// ── Strategies (proptest) ────────────────────────────────────────────

const END_POINTS: &[&str] = &["RDR_London", "RDR_NY", "ADR_Asia", "ODR_London", "TRN_NY"];
const MODELS: &[&str] = &["U", "UX", "D", "DX", "RC", "RX"];

fn arb_row() -> impl Strategy<Value = SequenceRow> {
    (0..END_POINTS.len(), prop::option::of(0..MODELS.len())).prop_map(|(end, rdr)| SequenceRow {
        date: NaiveDate::from_ymd_opt(2022, 3, 8).unwrap(),
        weekday: None,
        position_type: "High/Asia".into(),
        start_point: "OpenHigh".into(),
        end_point_session: END_POINTS[end].into(),
        adr_model: None,
        odr_model: None,
        rdr_model: rdr.map(|i| MODELS[i].to_string()),
        adr_integrity: None,
        odr_integrity: None,
        model_combination: None,
    })
}

fn arb_rows() -> impl Strategy<Value = Vec<SequenceRow>> {
    prop::collection::vec(arb_row(), 1..120)
}

// ── 1. Count conservation ────────────────────────────────────────────

proptest! {
    /// Σ group counts = subset size, and every count is ≥ 1.
    #[test]
    fn counts_sum_to_subset_size(rows in arb_rows()) {
        let refs: Vec<&SequenceRow> = rows.iter().collect();
        let stats = aggregate(&refs).expect("non-empty input aggregates");

        let sum: usize = stats.iter().map(|s| s.count).sum();
        prop_assert_eq!(sum, refs.len());
        prop_assert!(stats.iter().all(|s| s.count >= 1));
    }

    /// Percentages are in (0, 100] and within rounding error of the exact
    /// share; the engine never renormalizes them.
    #[test]
    fn percentages_match_counts(rows in arb_rows()) {
        let refs: Vec<&SequenceRow> = rows.iter().collect();
        let stats = aggregate(&refs).unwrap();
        let total = refs.len() as f64;

        for stat in &stats {
            let exact = stat.count as f64 / total * 100.0;
            prop_assert!(stat.percentage > 0.0 && stat.percentage <= 100.0);
            prop_assert!((stat.percentage - exact).abs() <= 0.005 + 1e-9);
        }
    }
}

// ── 2. Ranking order ─────────────────────────────────────────────────

proptest! {
    /// Counts are non-increasing, and groups with equal counts appear in the
    /// order their keys were first encountered in the input.
    #[test]
    fn ranking_is_descending_and_stable(rows in arb_rows()) {
        let refs: Vec<&SequenceRow> = rows.iter().collect();
        let stats = aggregate(&refs).unwrap();

        for pair in stats.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
            if pair[0].count == pair[1].count {
                let first_a = refs
                    .iter()
                    .position(|r| r.end_point_session == pair[0].end_point_session)
                    .unwrap();
                let first_b = refs
                    .iter()
                    .position(|r| r.end_point_session == pair[1].end_point_session)
                    .unwrap();
                prop_assert!(first_a < first_b, "tie order must be first-encounter");
            }
        }
    }
}

// ── 3. Tie completeness ──────────────────────────────────────────────

proptest! {
    /// The ranker returns exactly the set of models whose count equals the
    /// maximum — no tied value is dropped and no sub-maximal value appears.
    #[test]
    fn tie_set_is_complete(rows in arb_rows()) {
        let refs: Vec<&SequenceRow> = rows.iter().collect();
        let ranked = rank_rdr(&refs);

        // Independent recount.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for row in &refs {
            if let Some(model) = row.rdr_model.as_deref() {
                match counts.iter_mut().find(|(m, _)| *m == model) {
                    Some((_, c)) => *c += 1,
                    None => counts.push((model, 1)),
                }
            }
        }

        match counts.iter().map(|(_, c)| *c).max() {
            None => prop_assert!(ranked.is_empty()),
            Some(max) => {
                let expected: Vec<&str> = counts
                    .iter()
                    .filter(|(_, c)| *c == max)
                    .map(|(m, _)| *m)
                    .collect();
                let got: Vec<&str> = ranked.iter().map(|c| c.model.as_str()).collect();
                prop_assert_eq!(got, expected);
                prop_assert!(ranked.iter().all(|c| c.count == max));
            }
        }
    }

    /// A group with at least one RDR value always yields at least one entry.
    #[test]
    fn non_missing_group_yields_entries(rows in arb_rows()) {
        let refs: Vec<&SequenceRow> = rows.iter().collect();
        let has_rdr = refs.iter().any(|r| r.rdr_model.is_some());
        let ranked = rank_rdr(&refs);
        prop_assert_eq!(!ranked.is_empty(), has_rdr);
    }
}

// ── 4. Idempotence ───────────────────────────────────────────────────

proptest! {
    /// Aggregation and ranking have no hidden state: two calls on the same
    /// input agree exactly.
    #[test]
    fn aggregate_and_rank_are_idempotent(rows in arb_rows()) {
        let refs: Vec<&SequenceRow> = rows.iter().collect();
        prop_assert_eq!(aggregate(&refs), aggregate(&refs));
        prop_assert_eq!(rank_rdr(&refs), rank_rdr(&refs));
    }
}
