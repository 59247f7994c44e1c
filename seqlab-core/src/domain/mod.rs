//! Domain types: sequence rows, weekday labels, model vocabulary.

pub mod models;
pub mod sequence;
pub mod weekday;

pub use models::{is_known_model, MODEL_VOCABULARY};
pub use sequence::SequenceRow;
pub use weekday::Weekday;
