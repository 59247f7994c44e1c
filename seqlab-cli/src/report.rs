//! Plain-text report formatting for `seqlab analyze`.

use seqlab_core::data::ALL_SENTINEL;
use seqlab_core::query::{Comparison, FilterCriteria, ScenarioReport};

/// Render one scenario block, mirroring the dashboard's outcome listing.
pub fn scenario_block(label: &str, criteria: &FilterCriteria, report: Option<&ScenarioReport>) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {label} ===\n"));
    out.push_str(&format!(
        "Filters: start_point={} | position={} | day={} | adr={} | odr={}\n",
        criteria.start_point(),
        criteria.position_type(),
        criteria
            .weekday()
            .map(|d| d.to_string())
            .unwrap_or_else(|| ALL_SENTINEL.into()),
        criteria.adr_model().unwrap_or(ALL_SENTINEL),
        criteria.odr_model().unwrap_or(ALL_SENTINEL),
    ));

    match report {
        None => out.push_str("No matching data found for this scenario.\n"),
        Some(report) => {
            out.push_str("Outcomes:\n");
            for outcome in &report.outcomes {
                out.push_str(&format!(
                    "  {} | Count: {} ({:.2}%)\n",
                    outcome.stat.end_point_session, outcome.stat.count, outcome.stat.percentage
                ));
                for (i, rdr) in outcome.top_rdr.iter().enumerate() {
                    out.push_str(&format!(
                        "    {}. Most frequent RDR model: {} ({} times)\n",
                        i + 1,
                        rdr.model,
                        rdr.count
                    ));
                }
            }
            out.push_str(&format!("Number of datasets: {}\n", report.total_count));
        }
    }
    out
}

/// Render the comparison footer.
pub fn comparison_block(comparison: Option<&Comparison>) -> String {
    let mut out = String::new();
    out.push_str("=== Comparison ===\n");
    match comparison {
        Some(cmp) => {
            out.push_str(&format!(
                "Scenario 1: {:.2}% of total ({} datasets)\n",
                cmp.share1, cmp.total1
            ));
            out.push_str(&format!(
                "Scenario 2: {:.2}% of total ({} datasets)\n",
                cmp.share2, cmp.total2
            ));
        }
        None => out.push_str("Run both scenarios with results to enable comparison.\n"),
    }
    out
}
