use crate::compute::ComfortRange;
use crate::config::TripConfig;
use crate::display::ReportStyle;
use crate::error::PlannerError;
use crate::planner::{Outcome, TripPlanner};
use crate::store::{Region, Registry, StateCode, SubRegion};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::path::PathBuf;

fn to_py_err(e: PlannerError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

#[pyclass(name = "_TripPlanner")]
#[derive(Debug, Clone)]
pub struct PyTripPlanner {
    inner: TripPlanner,
}

#[pymethods]
impl PyTripPlanner {
    #[new]
    #[pyo3(signature = (climate_path=None, start_month=1, interval="1 week".to_string()))]
    pub fn new(climate_path: Option<PathBuf>, start_month: u32, interval: String) -> PyResult<Self> {
        let config = TripConfig {
            start_month,
            interval: interval.parse().map_err(to_py_err)?,
            ..Default::default()
        };
        let mut inner = TripPlanner::new(config).map_err(to_py_err)?;
        if let Some(path) = climate_path {
            inner.load_climate(path).map_err(to_py_err)?;
        }
        Ok(Self { inner })
    }

    pub fn set_start_month(&mut self, month: u32) -> PyResult<()> {
        crate::compute::validate_month(month).map_err(to_py_err)?;
        self.inner.config_mut().start_month = month;
        Ok(())
    }

    pub fn set_start_year(&mut self, year: i32) {
        self.inner.config_mut().start_year = Some(year);
    }

    pub fn set_interval(&mut self, interval: String) -> PyResult<()> {
        self.inner.config_mut().interval = interval.parse().map_err(to_py_err)?;
        Ok(())
    }

    #[pyo3(signature = (min=None, max=None))]
    pub fn set_temp_range(&mut self, min: Option<f64>, max: Option<f64>) -> PyResult<()> {
        let current = self.inner.config().comfort;
        let range = ComfortRange::new(min.unwrap_or(current.min), max.unwrap_or(current.max)).map_err(to_py_err)?;
        self.inner.config_mut().comfort = range;
        Ok(())
    }

    pub fn set_state_temp_range(&mut self, state: String, min: f64, max: f64) -> PyResult<()> {
        let range = ComfortRange::new(min, max).map_err(to_py_err)?;
        self.inner.config_mut().state_ranges.insert(state.to_ascii_uppercase(), range);
        Ok(())
    }

    #[pyo3(signature = (state=None))]
    pub fn set_start_state(&mut self, state: Option<String>) {
        self.inner.config_mut().start_state = state;
    }

    #[pyo3(signature = (state=None))]
    pub fn set_end_state(&mut self, state: Option<String>) {
        self.inner.config_mut().end_state = state;
    }

    /// Returns `(codes, temperatures)` per accepted path. Temperatures are
    /// empty when no climate table was loaded.
    pub fn plan(&self, states: Vec<String>) -> PyResult<Vec<(Vec<String>, Vec<f64>)>> {
        let report = self.inner.plan_states(&states).map_err(to_py_err)?;
        let codes = |path: Vec<StateCode>| -> Vec<String> { path.iter().map(|s| s.code().to_string()).collect() };
        Ok(match report.outcome {
            Outcome::Unfiltered(paths) => paths.into_iter().map(|p| (codes(p), Vec::new())).collect(),
            Outcome::Filtered(out) => out.itineraries.iter().map(|i| (codes(i.path()), i.temperatures())).collect(),
        })
    }

    #[pyo3(signature = (states, with_temps=false, full_names=false))]
    pub fn list_paths(&self, states: Vec<String>, with_temps: bool, full_names: bool) -> PyResult<Vec<String>> {
        let report = self.inner.plan_states(&states).map_err(to_py_err)?;
        Ok(report.lines(ReportStyle { with_temperatures: with_temps, full_names }))
    }
}

#[pyfunction]
#[pyo3(signature = (top, sub=None))]
fn states_by_region(top: String, sub: Option<String>) -> PyResult<Vec<String>> {
    let top: Region = top.parse().map_err(to_py_err)?;
    let sub = sub.map(|s| s.parse::<SubRegion>()).transpose().map_err(to_py_err)?;
    Ok(Registry::global().states_by_region(top, sub).iter().map(|s| s.code().to_string()).collect())
}

/// Defines the `state_paths._core` Python module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTripPlanner>()?;
    m.add_function(wrap_pyfunction!(states_by_region, m)?)?;
    Ok(())
}
