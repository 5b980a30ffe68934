//! Simulates each candidate path against the climate table.
pub mod calendar;
pub mod comfort;
pub mod engine;

pub use calendar::{validate_month, Interval, SimulatedCalendar};
pub use comfort::{ComfortPolicy, ComfortRange};
pub use engine::{ComfortFilter, FilterOutcome, FilterSettings, Itinerary, Stop};
