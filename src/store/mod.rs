//! Reference data: state codes, borders, classification and climate.
pub mod climate;
pub mod registry;
mod states;
pub mod types;

pub use climate::{ClimateTable, MonthlyValues};
pub use registry::{BorderSource, RegionSource, Registry};
pub use types::{Classification, Region, StateCode, StateRecord, SubRegion};
