//! Human-readable rendering of paths and itineraries.
pub mod report;

pub use report::{format_itineraries, format_paths, ReportStyle};
