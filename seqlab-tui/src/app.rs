//! Application state — single-owner, main-thread only.
//!
//! The whole pipeline re-runs on every selector change; the dataset is loaded
//! once at startup and shared read-only by both scenario panes.

use seqlab_core::data::{Dataset, FilterOptions, ALL_SENTINEL};
use seqlab_core::query::{compare, run_scenario, Comparison, FilterCriteria, ScenarioReport};

/// The five selector rows of a scenario pane, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorField {
    StartPoint,
    Position,
    Day,
    AdrModel,
    OdrModel,
}

impl SelectorField {
    pub const COUNT: usize = 5;

    pub fn index(self) -> usize {
        match self {
            SelectorField::StartPoint => 0,
            SelectorField::Position => 1,
            SelectorField::Day => 2,
            SelectorField::AdrModel => 3,
            SelectorField::OdrModel => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(SelectorField::StartPoint),
            1 => Some(SelectorField::Position),
            2 => Some(SelectorField::Day),
            3 => Some(SelectorField::AdrModel),
            4 => Some(SelectorField::OdrModel),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SelectorField::StartPoint => "Start Point",
            SelectorField::Position => "Position",
            SelectorField::Day => "Day",
            SelectorField::AdrModel => "ADR Model",
            SelectorField::OdrModel => "ODR Model",
        }
    }

    pub fn next(self) -> SelectorField {
        SelectorField::from_index((self.index() + 1) % Self::COUNT).unwrap()
    }

    pub fn prev(self) -> SelectorField {
        SelectorField::from_index((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap()
    }
}

/// Selector choices shared by both panes, derived from the dataset.
///
/// Optional selectors carry the "All" sentinel at index 0; the required ones
/// do not — a selection always exists for them.
#[derive(Debug, Clone)]
pub struct SelectorOptions {
    pub start_points: Vec<String>,
    pub position_types: Vec<String>,
    pub days: Vec<String>,
    pub adr_models: Vec<String>,
    pub odr_models: Vec<String>,
}

impl SelectorOptions {
    pub fn from_filter_options(options: &FilterOptions) -> Self {
        let with_all = |values: &[String]| {
            let mut out = vec![ALL_SENTINEL.to_string()];
            out.extend(values.iter().cloned());
            out
        };
        Self {
            start_points: options.start_points.clone(),
            position_types: options.position_types.clone(),
            days: with_all(
                &options
                    .weekdays
                    .iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>(),
            ),
            adr_models: with_all(&options.adr_models),
            odr_models: with_all(&options.odr_models),
        }
    }

    pub fn values_for(&self, field: SelectorField) -> &[String] {
        match field {
            SelectorField::StartPoint => &self.start_points,
            SelectorField::Position => &self.position_types,
            SelectorField::Day => &self.days,
            SelectorField::AdrModel => &self.adr_models,
            SelectorField::OdrModel => &self.odr_models,
        }
    }
}

/// One scenario pane: cursor, selector positions, and the latest report.
#[derive(Debug)]
pub struct ScenarioPane {
    pub field: SelectorField,
    pub selection: [usize; SelectorField::COUNT],
    pub report: Option<ScenarioReport>,
}

impl ScenarioPane {
    fn new() -> Self {
        Self {
            field: SelectorField::StartPoint,
            selection: [0; SelectorField::COUNT],
            report: None,
        }
    }

    pub fn selected_value<'a>(
        &self,
        options: &'a SelectorOptions,
        field: SelectorField,
    ) -> Option<&'a str> {
        options
            .values_for(field)
            .get(self.selection[field.index()])
            .map(String::as_str)
    }

    /// Current selections as engine criteria. "All" maps to no constraint.
    pub fn criteria(&self, options: &SelectorOptions) -> Option<FilterCriteria> {
        let start_point = self.selected_value(options, SelectorField::StartPoint)?;
        let position = self.selected_value(options, SelectorField::Position)?;

        let optional = |field: SelectorField| -> Option<String> {
            self.selected_value(options, field)
                .filter(|v| *v != ALL_SENTINEL)
                .map(str::to_string)
        };

        let weekday = optional(SelectorField::Day)
            .and_then(|label| seqlab_core::domain::Weekday::parse(&label));

        FilterCriteria::builder()
            .start_point(start_point)
            .position_type(position)
            .weekday(weekday)
            .adr_model(optional(SelectorField::AdrModel))
            .odr_model(optional(SelectorField::OdrModel))
            .build()
            .ok()
    }
}

/// Top-level TUI state.
pub struct AppState {
    pub dataset: Dataset,
    pub dataset_label: String,
    pub options: SelectorOptions,
    pub panes: [ScenarioPane; 2],
    pub focused: usize,
    pub comparison: Option<Comparison>,
    pub running: bool,
    pub status: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset, dataset_label: String) -> Self {
        let options = SelectorOptions::from_filter_options(&FilterOptions::from_dataset(&dataset));
        let mut app = Self {
            dataset,
            dataset_label,
            options,
            panes: [ScenarioPane::new(), ScenarioPane::new()],
            focused: 0,
            comparison: None,
            running: true,
            status: None,
        };
        if app.dataset.skipped_rows() > 0 {
            app.set_status(format!(
                "{} incomplete rows skipped at load",
                app.dataset.skipped_rows()
            ));
        }
        app.recompute();
        app
    }

    pub fn focused_pane_mut(&mut self) -> &mut ScenarioPane {
        &mut self.panes[self.focused]
    }

    pub fn switch_pane(&mut self) {
        self.focused = (self.focused + 1) % 2;
    }

    /// Cycle the focused field's value by `delta` (wrapping) and re-run.
    pub fn cycle_value(&mut self, delta: isize) {
        let field = self.panes[self.focused].field;
        let len = self.options.values_for(field).len();
        if len == 0 {
            return;
        }
        let idx = &mut self.panes[self.focused].selection[field.index()];
        *idx = (*idx as isize + delta).rem_euclid(len as isize) as usize;
        self.recompute();
    }

    /// Re-run both scenario pipelines and the comparison.
    ///
    /// Cheap enough to call on every input change: the whole pipeline is a
    /// bounded in-memory pass over the dataset.
    pub fn recompute(&mut self) {
        for pane_idx in 0..2 {
            let report = self.panes[pane_idx]
                .criteria(&self.options)
                .and_then(|criteria| run_scenario(&self.dataset, &criteria));
            self.panes[pane_idx].report = report;
        }
        let total = |idx: usize| {
            self.panes[idx]
                .report
                .as_ref()
                .map(|r| r.total_count)
                .unwrap_or(0)
        };
        self.comparison = compare(total(0), total(1));
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}
