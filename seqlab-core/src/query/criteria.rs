//! FilterCriteria — the value object describing one scenario's query.
//!
//! Criteria are built fresh per scenario per query, are immutable, and are
//! discarded after producing their filtered subset. Construction fails loudly
//! when a required field is unset: silently ignoring a required filter would
//! corrupt every downstream statistic.

use serde::Serialize;
use thiserror::Error;

use crate::domain::Weekday;

/// Contract violations when assembling criteria.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("filter criteria missing required field: start point")]
    MissingStartPoint,

    #[error("filter criteria missing required field: position type")]
    MissingPositionType,
}

/// One scenario's filter selection.
///
/// `start_point` and `position_type` are required equality filters; the three
/// optional fields apply only when set (`None` = the UI's "All"). Only the
/// builder can construct one, so the required fields are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterCriteria {
    start_point: String,
    position_type: String,
    weekday: Option<Weekday>,
    adr_model: Option<String>,
    odr_model: Option<String>,
}

impl FilterCriteria {
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    pub fn start_point(&self) -> &str {
        &self.start_point
    }

    pub fn position_type(&self) -> &str {
        &self.position_type
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.weekday
    }

    pub fn adr_model(&self) -> Option<&str> {
        self.adr_model.as_deref()
    }

    pub fn odr_model(&self) -> Option<&str> {
        self.odr_model.as_deref()
    }
}

/// Builder for [`FilterCriteria`]. `build` enforces the required fields.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    start_point: Option<String>,
    position_type: Option<String>,
    weekday: Option<Weekday>,
    adr_model: Option<String>,
    odr_model: Option<String>,
}

impl FilterCriteriaBuilder {
    pub fn start_point(mut self, value: impl Into<String>) -> Self {
        self.start_point = Some(value.into());
        self
    }

    pub fn position_type(mut self, value: impl Into<String>) -> Self {
        self.position_type = Some(value.into());
        self
    }

    pub fn weekday(mut self, value: Option<Weekday>) -> Self {
        self.weekday = value;
        self
    }

    pub fn adr_model(mut self, value: Option<impl Into<String>>) -> Self {
        self.adr_model = value.map(Into::into);
        self
    }

    pub fn odr_model(mut self, value: Option<impl Into<String>>) -> Self {
        self.odr_model = value.map(Into::into);
        self
    }

    pub fn build(self) -> Result<FilterCriteria, QueryError> {
        let start_point = match self.start_point {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(QueryError::MissingStartPoint),
        };
        let position_type = match self.position_type {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(QueryError::MissingPositionType),
        };
        Ok(FilterCriteria {
            start_point,
            position_type,
            weekday: self.weekday,
            adr_model: self.adr_model,
            odr_model: self.odr_model,
        })
    }
}
