//! Data layer: column layouts, instrument catalog, CSV loading, option
//! enumeration, synthetic demo data.

pub mod catalog;
pub mod dataset;
pub mod loader;
pub mod options;
pub mod schema;
pub mod synthetic;

pub use catalog::Instrument;
pub use dataset::Dataset;
pub use loader::{load_dataset, load_from_reader, DataError};
pub use options::{FilterOptions, ALL_SENTINEL};
pub use synthetic::demo_dataset;
