//! Temperature filter over enumerated paths.
use super::calendar::{Interval, SimulatedCalendar};
use super::comfort::ComfortPolicy;
use crate::analysis::Path;
use crate::error::PlannerError;
use crate::store::{MonthlyValues, StateCode};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSettings {
    pub start_year: i32,
    pub start_month: u32,
    pub interval: Interval,
    pub comfort: ComfortPolicy,
}

/// One state on an accepted itinerary and the conditions met there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stop {
    pub state: StateCode,
    pub month: u32,
    pub temperature: f64,
}

/// A path that passed the filter, paired with its temperature history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub stops: Vec<Stop>,
}

impl Itinerary {
    pub fn path(&self) -> Path {
        self.stops.iter().map(|s| s.state).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.stops.iter().map(|s| s.temperature).collect()
    }

    pub fn months(&self) -> Vec<u32> {
        self.stops.iter().map(|s| s.month).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOutcome {
    pub itineraries: Vec<Itinerary>,
    pub examined: usize,
    pub rejected: usize,
}

pub struct ComfortFilter<'a, C> {
    climate: &'a C,
    settings: &'a FilterSettings,
}

impl<'a, C: MonthlyValues + Sync> ComfortFilter<'a, C> {
    pub fn new(climate: &'a C, settings: &'a FilterSettings) -> Self {
        Self { climate, settings }
    }

    /// Keeps the paths whose every stop falls inside its comfort range, in
    /// input order. A missing climate reading aborts the whole pass.
    pub fn run(&self, paths: &[Path]) -> Result<FilterOutcome, PlannerError> {
        let simulated: Vec<Option<Itinerary>> = paths
            .par_iter()
            .map(|path| self.simulate(path))
            .collect::<Result<_, _>>()?;

        let itineraries: Vec<Itinerary> = simulated.into_iter().flatten().collect();
        let outcome = FilterOutcome {
            examined: paths.len(),
            rejected: paths.len() - itineraries.len(),
            itineraries,
        };

        tracing::info!("found {} paths suitable for temperature range", outcome.itineraries.len());
        Ok(outcome)
    }

    /// Walks one path on a fresh calendar. `Ok(None)` means the path was rejected.
    pub fn simulate(&self, path: &[StateCode]) -> Result<Option<Itinerary>, PlannerError> {
        let s = self.settings;
        let mut calendar = SimulatedCalendar::new(s.start_year, s.start_month, s.interval)?;
        let mut stops = Vec::with_capacity(path.len());

        for (i, &state) in path.iter().enumerate() {
            if i > 0 {
                calendar.advance()?;
            }
            let month = calendar.month();
            let temperature = self
                .climate
                .value(state, month)
                .ok_or_else(|| PlannerError::ClimateGap { code: state.code().to_string(), month })?;

            if !s.comfort.range_for(state).contains(temperature) {
                return Ok(None);
            }
            stops.push(Stop { state, month, temperature });
        }

        // Every stop must have been accounted for.
        if stops.len() != path.len() {
            return Ok(None);
        }
        Ok(Some(Itinerary { stops }))
    }
}
