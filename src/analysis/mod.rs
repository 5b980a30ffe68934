//! Graph algorithms over the border table.
pub mod paths;
pub mod topology;

pub use paths::{enumerate, Enumeration, Path, PathQuery};
pub use topology::{BoundedBorders, WorkingSubset};
