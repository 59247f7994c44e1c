//! Cross-scenario comparison — each scenario's share of the combined count.

use serde::Serialize;

use crate::query::aggregate::round2;

/// Relative dataset coverage of two scenarios.
///
/// The two shares are rounded independently and may not sum to exactly
/// 100.00. This mirrors the upstream computation and is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub share1: f64,
    pub share2: f64,
    pub total1: usize,
    pub total2: usize,
}

/// Compare two scenario totals.
///
/// Returns `None` — comparison unavailable — when either total is zero
/// (a scenario with no matches has nothing to compare). Pure and idempotent.
pub fn compare(total1: usize, total2: usize) -> Option<Comparison> {
    if total1 == 0 || total2 == 0 {
        return None;
    }
    let combined = (total1 + total2) as f64;
    Some(Comparison {
        share1: round2(total1 as f64 / combined * 100.0),
        share2: round2(total2 as f64 / combined * 100.0),
        total1,
        total2,
    })
}
