//! Co-occurrence ranking — the most frequent RDR model(s) within one outcome
//! group, ties included.

use serde::Serialize;

use crate::domain::SequenceRow;

/// One RDR model tied at the maximum frequency within an outcome group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoOccurrence {
    pub model: String,
    pub count: usize,
}

/// Rank the RDR models of one outcome group's rows.
///
/// Rows with a missing RDR model are excluded from candidacy. Every model
/// whose count equals the group maximum is returned, in the order first
/// encountered in `group_rows`; ties are never broken arbitrarily. A group
/// with no RDR values yields an empty list.
pub fn rank_rdr(group_rows: &[&SequenceRow]) -> Vec<CoOccurrence> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for row in group_rows {
        if let Some(model) = &row.rdr_model {
            match counts.iter_mut().find(|(key, _)| key == model) {
                Some((_, count)) => *count += 1,
                None => counts.push((model.clone(), 1)),
            }
        }
    }

    let max = match counts.iter().map(|(_, count)| *count).max() {
        Some(max) => max,
        None => return Vec::new(),
    };

    counts
        .into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(model, count)| CoOccurrence { model, count })
        .collect()
}
