//! Error type shared by every stage of the planner.
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum PlannerError {
    #[error("'{code}' is not defined in our state borders")]
    UnknownState { code: String },
    #[error("start state '{code}' must be one of the states provided")]
    StartNotInSubset { code: String },
    #[error("end state '{code}' must be one of the states provided")]
    EndNotInSubset { code: String },
    #[error("no climate reading for '{code}' in month {month}")]
    ClimateGap { code: String, month: u32 },
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("invalid stay interval '{0}'")]
    InvalidInterval(String),
    #[error("invalid comfort range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
    #[error("climate data line {line}: {message}")]
    ClimateParse { line: usize, message: String },
    #[error("I/O error: {0}")]
    Io(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("simulated calendar ran past the supported date range")]
    CalendarOverflow,
}

impl From<std::io::Error> for PlannerError {
    fn from(e: std::io::Error) -> Self {
        PlannerError::Io(e.to_string())
    }
}
