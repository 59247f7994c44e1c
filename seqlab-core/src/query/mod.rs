//! Query engine: criteria, predicate, aggregation, co-occurrence ranking,
//! scenario pipeline, cross-scenario comparison.

pub mod aggregate;
pub mod co_occurrence;
pub mod compare;
pub mod criteria;
pub mod predicate;
pub mod scenario;

pub use aggregate::{aggregate, round2, OutcomeStat};
pub use co_occurrence::{rank_rdr, CoOccurrence};
pub use compare::{compare, Comparison};
pub use criteria::{FilterCriteria, FilterCriteriaBuilder, QueryError};
pub use predicate::{filter_rows, matches};
pub use scenario::{run_scenario, OutcomeBreakdown, ScenarioReport};
