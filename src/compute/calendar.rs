//! Simulated travel calendar.

use crate::error::PlannerError;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How long the traveller stays in each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Interval {
    Days(u32),
    Weeks(u32),
    Months(u32),
}

impl Default for Interval {
    fn default() -> Self { Interval::Weeks(1) }
}

impl FromStr for Interval {
    type Err = PlannerError;

    /// Parses `"1 week"`, `"+2 months"`, `"10 days"`, `"1 year"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlannerError::InvalidInterval(s.to_string());
        let trimmed = s.trim().trim_start_matches('+').trim();

        let split = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
        let (count, unit) = trimmed.split_at(split);
        let count: u32 = count.parse().map_err(|_| invalid())?;
        if count == 0 {
            return Err(invalid());
        }

        match unit.trim().to_ascii_lowercase().as_str() {
            "day" | "days" => Ok(Interval::Days(count)),
            "week" | "weeks" => Ok(Interval::Weeks(count)),
            "month" | "months" => Ok(Interval::Months(count)),
            "year" | "years" => count.checked_mul(12).map(Interval::Months).ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Interval {
    type Error = PlannerError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Interval> for String {
    fn from(i: Interval) -> Self { i.to_string() }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, unit) = match self {
            Interval::Days(n) => (n, "day"),
            Interval::Weeks(n) => (n, "week"),
            Interval::Months(n) => (n, "month"),
        };
        if *n == 1 { write!(f, "1 {}", unit) } else { write!(f, "{} {}s", n, unit) }
    }
}

pub fn validate_month(month: u32) -> Result<u32, PlannerError> {
    if (1..=12).contains(&month) { Ok(month) } else { Err(PlannerError::InvalidMonth(month)) }
}

/// A date cursor that starts on the first day of a month and moves forward
/// by a fixed interval for each state visited.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedCalendar {
    start: NaiveDate,
    cursor: NaiveDate,
    interval: Interval,
}

impl SimulatedCalendar {
    pub fn new(year: i32, month: u32, interval: Interval) -> Result<Self, PlannerError> {
        let month = validate_month(month)?;
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(PlannerError::CalendarOverflow)?;
        Ok(Self { start, cursor: start, interval })
    }

    /// Month (1..=12) the cursor currently sits in.
    pub fn month(&self) -> u32 { self.cursor.month() }

    pub fn date(&self) -> NaiveDate { self.cursor }

    pub fn reset(&mut self) { self.cursor = self.start; }

    pub fn advance(&mut self) -> Result<(), PlannerError> {
        let next = match self.interval {
            Interval::Days(n) => self.cursor.checked_add_days(Days::new(n as u64)),
            Interval::Weeks(n) => self.cursor.checked_add_days(Days::new(n as u64 * 7)),
            Interval::Months(n) => self.cursor.checked_add_months(Months::new(n)),
        };
        self.cursor = next.ok_or(PlannerError::CalendarOverflow)?;
        Ok(())
    }
}
