//! End-to-end planning: selection -> subset -> covering paths -> comfort filter.
use crate::analysis::{enumerate, BoundedBorders, Enumeration, Path, PathQuery, WorkingSubset};
use crate::compute::{ComfortFilter, ComfortPolicy, FilterOutcome, FilterSettings};
use crate::config::TripConfig;
use crate::display::{format_itineraries, format_paths, ReportStyle};
use crate::error::PlannerError;
use crate::store::{ClimateTable, Registry, StateCode};
use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct TripPlanner {
    config: TripConfig,
    climate: Option<ClimateTable>,
    /// Rows dropped while loading `climate`, repeated in every report.
    climate_issues: Vec<PlannerError>,
}

/// Result of one planning run, with node-level problems collected as issues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    /// The working subset actually searched.
    pub states: Vec<StateCode>,
    /// Covering paths found before any temperature filtering.
    pub candidates: usize,
    pub truncated: bool,
    pub outcome: Outcome,
    pub issues: Vec<PlannerError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "results", rename_all = "snake_case")]
pub enum Outcome {
    /// No climate table was available, so every covering path is reported.
    Unfiltered(Vec<Path>),
    Filtered(FilterOutcome),
}

impl TripReport {
    pub fn lines(&self, style: ReportStyle) -> Vec<String> {
        match &self.outcome {
            Outcome::Unfiltered(paths) => format_paths(paths, style.full_names),
            Outcome::Filtered(out) => format_itineraries(&out.itineraries, style),
        }
    }

    /// Number of paths in the final result.
    pub fn accepted(&self) -> usize {
        match &self.outcome {
            Outcome::Unfiltered(paths) => paths.len(),
            Outcome::Filtered(out) => out.itineraries.len(),
        }
    }
}

impl TripPlanner {
    pub fn new(config: TripConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        Ok(Self { config, climate: None, climate_issues: Vec::new() })
    }

    /// Like `new`, but also loads `climate_data` when the config names a file.
    pub fn from_config(config: TripConfig) -> Result<Self, PlannerError> {
        let path = config.climate_data.clone();
        let mut planner = Self::new(config)?;
        if let Some(path) = path {
            planner.load_climate(path)?;
        }
        Ok(planner)
    }

    /// Loads a climate file, keeping the rows that parse. Rejected rows show
    /// up as issues on every report.
    pub fn load_climate(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), PlannerError> {
        let (table, issues) = ClimateTable::load_lenient(path)?;
        self.climate = Some(table);
        self.climate_issues = issues;
        Ok(())
    }

    pub fn with_climate(mut self, climate: ClimateTable) -> Self {
        self.climate = Some(climate);
        self.climate_issues.clear();
        self
    }

    pub fn config(&self) -> &TripConfig { &self.config }
    pub fn config_mut(&mut self) -> &mut TripConfig { &mut self.config }
    pub fn climate(&self) -> Option<&ClimateTable> { self.climate.as_ref() }

    /// Plans over the states named by the config's selection.
    pub fn plan(&self) -> Result<TripReport, PlannerError> {
        let codes = self.config.selection.codes(Registry::global())?;
        self.plan_states(&codes)
    }

    /// Plans over an explicit list of state codes.
    ///
    /// Unknown codes, unknown per-state range codes, rejected climate rows and
    /// invalid start/end constraints are reported in `issues`; a missing
    /// climate reading for a visited state fails the whole run.
    pub fn plan_states<S: AsRef<str>>(&self, codes: &[S]) -> Result<TripReport, PlannerError> {
        let registry = Registry::global();
        let (subset, subset_issues) = WorkingSubset::resolve(codes, registry);
        let mut issues = self.climate_issues.clone();
        issues.extend(subset_issues);
        let _span = tracing::info_span!("plan", states = subset.len()).entered();

        let enumeration = match self.path_query(registry) {
            Ok(query) => {
                let borders = BoundedBorders::build(&subset, registry)?;
                enumerate(&subset, &borders, &query).unwrap_or_else(|e| {
                    tracing::warn!("{}", e);
                    issues.push(e);
                    Enumeration::default()
                })
            }
            Err(e) => {
                tracing::warn!("{}", e);
                issues.push(e);
                Enumeration::default()
            }
        };

        let candidates = enumeration.paths.len();
        let (settings, range_issues) = self.filter_settings();
        issues.extend(range_issues);
        let outcome = match &self.climate {
            Some(climate) => Outcome::Filtered(ComfortFilter::new(climate, &settings).run(&enumeration.paths)?),
            None => Outcome::Unfiltered(enumeration.paths),
        };

        Ok(TripReport {
            states: subset.members().to_vec(),
            candidates,
            truncated: enumeration.truncated,
            outcome,
            issues,
        })
    }

    fn path_query(&self, registry: &Registry) -> Result<PathQuery, PlannerError> {
        let resolve = |code: &Option<String>| code.as_deref().map(|c| registry.resolve(c)).transpose();
        Ok(PathQuery {
            start: resolve(&self.config.start_state)?,
            end: resolve(&self.config.end_state)?,
            max_paths: self.config.max_paths,
        })
    }

    fn filter_settings(&self) -> (FilterSettings, Vec<PlannerError>) {
        let (ranges, issues) = self.config.resolved_ranges();
        let mut comfort = ComfortPolicy::new(self.config.comfort);
        comfort.overrides.extend(ranges);

        let settings = FilterSettings {
            start_year: self.config.start_year.unwrap_or_else(|| chrono::Local::now().year()),
            start_month: self.config.start_month,
            interval: self.config.interval,
            comfort,
        };
        (settings, issues)
    }
}
