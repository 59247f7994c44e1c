//! SeqLab Core — sequence rows, dataset loading, and the query pipeline.
//!
//! This crate contains the heart of the sequence-outcome analyzer:
//! - Domain types (sequence rows, weekday labels, model vocabulary)
//! - Instrument catalog and per-instrument CSV column layouts
//! - CSV loader producing immutable, fingerprinted datasets
//! - Filter criteria with loud required-field enforcement
//! - Outcome aggregation with stable, first-encounter tie ordering
//! - Tie-aware RDR co-occurrence ranking per outcome group
//! - Cross-scenario coverage comparison
//!
//! Everything is a pure function of its inputs: datasets are read-only after
//! construction, so two scenario pipelines can share one dataset with no
//! synchronization.

pub mod config;
pub mod data;
pub mod domain;
pub mod query;
