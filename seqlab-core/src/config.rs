//! TOML analysis configuration — one or two scenarios against one dataset.
//!
//! ```toml
//! [data]
//! path = "data/cl_sequences.csv"
//! instrument = "CL"
//!
//! [scenario1]
//! start_point = "OpenHigh (Green)"
//! position_type = "High/Asia"
//! day = "Tuesday"          # optional; omit or "All" for no constraint
//! adr_model = "UX"         # optional
//! odr_model = "D"          # optional
//!
//! [scenario2]              # optional; present = comparison run
//! start_point = "OpenLow (Red)"
//! position_type = "Low/Asia"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::catalog::Instrument;
use crate::data::options::ALL_SENTINEL;
use crate::domain::Weekday;
use crate::query::{FilterCriteria, QueryError};

/// Errors from the configuration layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown instrument '{0}' (expected one of: CL, ES)")]
    UnknownInstrument(String),

    #[error("unknown day '{0}'")]
    InvalidDay(String),

    #[error(transparent)]
    Criteria(#[from] QueryError),
}

/// The `[data]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: PathBuf,
    pub instrument: String,
}

impl DataConfig {
    pub fn instrument(&self) -> Result<Instrument, ConfigError> {
        Instrument::parse(&self.instrument)
            .ok_or_else(|| ConfigError::UnknownInstrument(self.instrument.clone()))
    }
}

/// One scenario's filter selection as written in TOML.
///
/// Optional fields accept the "All" sentinel as equivalent to omission, so a
/// config exported from the UI round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub start_point: String,
    pub position_type: String,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub adr_model: Option<String>,
    #[serde(default)]
    pub odr_model: Option<String>,
}

impl ScenarioSpec {
    /// Bridge to the engine's criteria value object.
    pub fn to_criteria(&self) -> Result<FilterCriteria, ConfigError> {
        let weekday = match normalize(self.day.as_deref()) {
            Some(label) => {
                Some(Weekday::parse(label).ok_or_else(|| ConfigError::InvalidDay(label.into()))?)
            }
            None => None,
        };

        let criteria = FilterCriteria::builder()
            .start_point(self.start_point.clone())
            .position_type(self.position_type.clone())
            .weekday(weekday)
            .adr_model(normalize(self.adr_model.as_deref()))
            .odr_model(normalize(self.odr_model.as_deref()))
            .build()?;
        Ok(criteria)
    }
}

/// Map omitted, blank, and "All" cells to "no constraint".
fn normalize(value: Option<&str>) -> Option<&str> {
    let value = value?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL_SENTINEL) {
        None
    } else {
        Some(value)
    }
}

/// Full analysis config: dataset plus one or two scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub data: DataConfig,
    pub scenario1: ScenarioSpec,
    #[serde(default)]
    pub scenario2: Option<ScenarioSpec>,
}

impl AnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
