//! Enumerates road-trip orderings through bordering U.S. states and keeps the
//! ones whose every stop stays inside a temperature comfort range for the
//! month the traveller arrives.
//!
//! The pipeline is: pick a working subset of states, restrict the border table
//! to it, enumerate every path that visits each member exactly once, then walk
//! each path on a simulated calendar against a monthly climate table.

pub mod analysis;
pub mod compute;
pub mod config;
pub mod display;
pub mod error;
pub mod planner;
pub mod store;

#[cfg(feature = "python")]
mod bindings;

pub use analysis::{enumerate, BoundedBorders, Enumeration, Path, PathQuery, WorkingSubset};
pub use compute::{ComfortFilter, ComfortPolicy, ComfortRange, FilterOutcome, FilterSettings, Interval, Itinerary, Stop};
pub use config::{Selection, TripConfig};
pub use display::ReportStyle;
pub use error::PlannerError;
pub use planner::{Outcome, TripPlanner, TripReport};
pub use store::{ClimateTable, MonthlyValues, Region, Registry, StateCode, SubRegion};
