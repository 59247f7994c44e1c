//! Scenario pipeline — filter, aggregate, and annotate one scenario's query.

use serde::Serialize;

use crate::data::dataset::Dataset;
use crate::domain::SequenceRow;
use crate::query::aggregate::{aggregate, OutcomeStat};
use crate::query::co_occurrence::{rank_rdr, CoOccurrence};
use crate::query::criteria::FilterCriteria;
use crate::query::predicate::filter_rows;

/// One ranked outcome with its most-frequent RDR model(s).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeBreakdown {
    #[serde(flatten)]
    pub stat: OutcomeStat,
    /// Every RDR model tied at the group maximum; empty when the group
    /// carries no RDR values.
    pub top_rdr: Vec<CoOccurrence>,
}

/// The full result bundle for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Sorted by count descending, first-encounter order on ties.
    pub outcomes: Vec<OutcomeBreakdown>,
    /// Size of the filtered subset; equals the sum of outcome counts.
    pub total_count: usize,
}

/// Run one scenario over a dataset.
///
/// Returns `None` when no row matches — the expected empty state the caller
/// renders as "no matching data", never a failure. Criteria validity is
/// enforced at construction, so the pipeline itself cannot fail.
pub fn run_scenario(dataset: &Dataset, criteria: &FilterCriteria) -> Option<ScenarioReport> {
    let selected = filter_rows(dataset, criteria);
    let stats = aggregate(&selected)?;
    let total_count = selected.len();

    let outcomes = stats
        .into_iter()
        .map(|stat| {
            let group: Vec<&SequenceRow> = selected
                .iter()
                .copied()
                .filter(|row| row.end_point_session == stat.end_point_session)
                .collect();
            let top_rdr = rank_rdr(&group);
            OutcomeBreakdown { stat, top_rdr }
        })
        .collect();

    Some(ScenarioReport {
        outcomes,
        total_count,
    })
}
