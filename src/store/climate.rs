//! Monthly average temperature table, keyed by state.
//!
//! The source format is the NOAA state climatology listing: one line per
//! state, the full state name followed by twelve monthly means (Jan..Dec).
//! Any trailing columns after the twelfth (such as an annual mean) are ignored.

use super::types::StateCode;
use crate::error::PlannerError;
use std::collections::HashMap;
use std::path::Path;

/// Lookup of a scalar value for a state in a calendar month (1..=12).
pub trait MonthlyValues {
    fn value(&self, state: StateCode, month: u32) -> Option<f64>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClimateTable {
    monthly: HashMap<StateCode, [f64; 12]>,
}

impl ClimateTable {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.monthly.len() }
    pub fn is_empty(&self) -> bool { self.monthly.is_empty() }

    pub fn insert(&mut self, state: StateCode, months: [f64; 12]) {
        self.monthly.insert(state, months);
    }

    pub fn months(&self, state: StateCode) -> Option<&[f64; 12]> {
        self.monthly.get(&state)
    }

    /// Strict load: the first malformed row fails the whole file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlannerError> {
        let table = Self::parse(&read(path.as_ref())?)?;
        tracing::debug!(path = %path.as_ref().display(), states = table.len(), "loaded climate data");
        Ok(table)
    }

    /// Loads every row that parses and returns the rejected rows as issues.
    /// Only I/O failure is an error.
    pub fn load_lenient(path: impl AsRef<Path>) -> Result<(Self, Vec<PlannerError>), PlannerError> {
        let (table, issues) = Self::parse_lenient(&read(path.as_ref())?);
        tracing::debug!(
            path = %path.as_ref().display(),
            states = table.len(),
            skipped = issues.len(),
            "loaded climate data"
        );
        Ok((table, issues))
    }

    pub fn parse(text: &str) -> Result<Self, PlannerError> {
        let mut table = Self::new();
        for row in rows(text) {
            let (state, months) = row?;
            table.insert(state, months);
        }
        Ok(table)
    }

    pub fn parse_lenient(text: &str) -> (Self, Vec<PlannerError>) {
        let mut table = Self::new();
        let mut issues = Vec::new();
        for row in rows(text) {
            match row {
                Ok((state, months)) => table.insert(state, months),
                Err(e) => {
                    tracing::warn!("skipping climate row: {}", e);
                    issues.push(e);
                }
            }
        }
        (table, issues)
    }
}

fn read(path: &Path) -> Result<String, PlannerError> {
    std::fs::read_to_string(path).map_err(|e| PlannerError::Io(format!("{}: {}", path.display(), e)))
}

/// Non-blank lines, parsed, tagged with their 1-based line number on failure.
fn rows(text: &str) -> impl Iterator<Item = Result<(StateCode, [f64; 12]), PlannerError>> + '_ {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line).map_err(|message| PlannerError::ClimateParse { line: i + 1, message }))
}

impl MonthlyValues for ClimateTable {
    fn value(&self, state: StateCode, month: u32) -> Option<f64> {
        let idx = (month as usize).checked_sub(1)?;
        self.monthly.get(&state)?.get(idx).copied()
    }
}

fn parse_line(line: &str) -> Result<(StateCode, [f64; 12]), String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    // The name is every leading token that is not a number.
    let name_len = tokens.iter().take_while(|t| t.parse::<f64>().is_err()).count();
    if name_len == 0 {
        return Err("missing state name".into());
    }
    let name = tokens[..name_len].join(" ");
    let state = StateCode::from_name(&name).ok_or_else(|| format!("unknown state name '{}'", name))?;

    let values = &tokens[name_len..];
    if values.len() < 12 {
        return Err(format!("expected 12 monthly values for '{}', found {}", name, values.len()));
    }

    let mut months = [0.0; 12];
    for (slot, raw) in months.iter_mut().zip(values) {
        let value = raw.parse::<f64>().map_err(|_| format!("'{}' is not a number", raw))?;
        if !value.is_finite() {
            return Err(format!("'{}' is not a finite reading", raw));
        }
        *slot = value;
    }
    Ok((state, months))
}
