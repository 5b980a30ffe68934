//! Trip configuration, loadable from TOML and overridable from the CLI.
//!
//! ```toml
//! climate_data = "tmp.state.19712000.climo"
//! start_month = 4
//! interval = "1 month"
//! start_state = "NM"
//!
//! [comfort]
//! min = 40
//! max = 68
//!
//! [state_ranges.NM]
//! min = 20
//! max = 50
//!
//! [selection]
//! region = "W"
//! sub_region = "M"
//! ```

use crate::compute::{validate_month, ComfortRange, Interval};
use crate::error::PlannerError;
use crate::store::{Region, Registry, StateCode, SubRegion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TripConfig {
    /// NOAA-style climate table. Without it only enumeration runs.
    pub climate_data: Option<PathBuf>,
    pub start_month: u32,
    /// Defaults to the current calendar year.
    pub start_year: Option<i32>,
    pub interval: Interval,
    pub comfort: ComfortRange,
    /// Per-state comfort overrides keyed by state code.
    pub state_ranges: BTreeMap<String, ComfortRange>,
    pub start_state: Option<String>,
    pub end_state: Option<String>,
    /// Stop enumerating after this many paths.
    pub max_paths: Option<usize>,
    pub selection: Selection,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            climate_data: None,
            start_month: 1,
            start_year: None,
            interval: Interval::default(),
            comfort: ComfortRange::default(),
            state_ranges: BTreeMap::new(),
            start_state: None,
            end_state: None,
            max_paths: None,
            selection: Selection::default(),
        }
    }
}

/// Which states to route through: an explicit list, or a census region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selection {
    pub states: Vec<String>,
    pub region: Option<String>,
    pub sub_region: Option<String>,
}

impl Selection {
    /// Raw state codes for this selection. An explicit list wins over a region.
    pub fn codes(&self, registry: &Registry) -> Result<Vec<String>, PlannerError> {
        if !self.states.is_empty() {
            return Ok(self.states.clone());
        }
        match &self.region {
            Some(top) => {
                let top: Region = top.parse()?;
                let sub = self.sub_region.as_deref().map(str::parse::<SubRegion>).transpose()?;
                Ok(registry.states_by_region(top, sub).iter().map(|s| s.code().to_string()).collect())
            }
            None if self.sub_region.is_some() => Err(PlannerError::Config("sub_region requires region".into())),
            None => Ok(Vec::new()),
        }
    }
}

impl TripConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlannerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PlannerError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "loaded trip config");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, PlannerError> {
        let config: Self = toml::from_str(text).map_err(|e| PlannerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the scalar settings. State codes are checked when planning so
    /// that one bad code does not reject the whole file.
    pub fn validate(&self) -> Result<(), PlannerError> {
        validate_month(self.start_month)?;
        self.comfort.validated()?;
        for range in self.state_ranges.values() {
            range.validated()?;
        }
        Ok(())
    }

    /// Per-state overrides resolved to codes; unknown codes are returned as issues.
    pub fn resolved_ranges(&self) -> (Vec<(StateCode, ComfortRange)>, Vec<PlannerError>) {
        let mut ranges = Vec::new();
        let mut issues = Vec::new();
        for (code, range) in &self.state_ranges {
            match StateCode::parse(code) {
                Ok(state) => ranges.push((state, *range)),
                Err(e) => issues.push(e),
            }
        }
        (ranges, issues)
    }
}
