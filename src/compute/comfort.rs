use crate::error::PlannerError;
use crate::store::StateCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inclusive `[min, max]` bound on an acceptable temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ComfortRange {
    fn default() -> Self { Self { min: 0.0, max: 105.0 } }
}

impl ComfortRange {
    pub fn new(min: f64, max: f64) -> Result<Self, PlannerError> {
        Self { min, max }.validated()
    }

    pub fn validated(self) -> Result<Self, PlannerError> {
        if self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            return Err(PlannerError::InvalidRange { min: self.min, max: self.max });
        }
        Ok(self)
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Global range plus per-state overrides. An override always wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComfortPolicy {
    pub global: ComfortRange,
    pub overrides: HashMap<StateCode, ComfortRange>,
}

impl ComfortPolicy {
    pub fn new(global: ComfortRange) -> Self {
        Self { global, overrides: HashMap::new() }
    }

    pub fn with_override(mut self, state: StateCode, range: ComfortRange) -> Self {
        self.overrides.insert(state, range);
        self
    }

    pub fn range_for(&self, state: StateCode) -> ComfortRange {
        self.overrides.get(&state).copied().unwrap_or(self.global)
    }
}
