//! Outcome aggregation — group the filtered subset by end point session,
//! count, and rank.
//!
//! Grouping is an explicit first-encounter-keyed routine over a Vec, not a
//! hash map, so tie order is deterministic by construction. The descending
//! sort is Rust's stable `sort_by`, which keeps equal counts in first-
//! encounter order.

use serde::Serialize;

use crate::domain::SequenceRow;

/// One ranked outcome group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeStat {
    pub end_point_session: String,
    pub count: usize,
    /// `count / subset_total × 100`, rounded to two decimals. Informational:
    /// the percentages across groups are not renormalized to sum to 100.
    pub percentage: f64,
}

/// Round to two decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Group `rows` by end point session and rank by count descending.
///
/// Returns `None` for an empty subset — the expected "no matching data"
/// state, not a failure. Every returned count is ≥ 1 and the counts sum to
/// `rows.len()`.
pub fn aggregate(rows: &[&SequenceRow]) -> Option<Vec<OutcomeStat>> {
    if rows.is_empty() {
        return None;
    }

    let mut groups: Vec<(String, usize)> = Vec::new();
    for row in rows {
        match groups
            .iter_mut()
            .find(|(key, _)| key == &row.end_point_session)
        {
            Some((_, count)) => *count += 1,
            None => groups.push((row.end_point_session.clone(), 1)),
        }
    }

    let total = rows.len();
    let mut stats: Vec<OutcomeStat> = groups
        .into_iter()
        .map(|(end_point_session, count)| OutcomeStat {
            end_point_session,
            count,
            percentage: round2(count as f64 / total as f64 * 100.0),
        })
        .collect();

    // Stable: equal counts keep first-encounter order.
    stats.sort_by(|a, b| b.count.cmp(&a.count));

    Some(stats)
}
