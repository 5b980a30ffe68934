use super::states::{BORDERS, STATES};
use super::types::*;
use crate::error::PlannerError;
use std::sync::LazyLock;

/// Neighbour lookup used by the subgraph builder.
pub trait BorderSource {
    /// Neighbours of `state` in table order, or `None` when `state` has no
    /// entry in the border table at all.
    fn neighbors(&self, state: StateCode) -> Option<&[StateCode]>;
}

/// Census classification lookup.
pub trait RegionSource {
    fn classify(&self, state: StateCode) -> Option<Classification>;
}

/// Process-wide border table in a dense CSR layout.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    // Topology (CSR): one optional range per state
    pub neighbors_flat: Vec<StateCode>,
    pub neighbor_ranges: Vec<Option<(u32, u32)>>, // (start, count)
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::build);

impl Registry {
    /// The shared, immutable registry built from the static tables.
    pub fn global() -> &'static Registry { &GLOBAL }

    pub fn count(&self) -> usize { self.neighbor_ranges.len() }

    fn build() -> Self {
        let mut reg = Registry {
            neighbors_flat: Vec::new(),
            neighbor_ranges: vec![None; STATES.len()],
        };

        for (code, borders) in BORDERS {
            // The static tables are written together; a miss here is a typo in them.
            let state = StateCode::parse(code).expect("BUG: border table key missing from state table");
            let start = reg.neighbors_flat.len() as u32;
            for n in borders.iter() {
                let neighbor = StateCode::parse(n).expect("BUG: border table entry missing from state table");
                reg.neighbors_flat.push(neighbor);
            }
            reg.neighbor_ranges[state.index()] = Some((start, borders.len() as u32));
        }
        reg
    }

    /// Resolves a code and requires it to have a border entry.
    pub fn resolve(&self, code: &str) -> Result<StateCode, PlannerError> {
        let state = StateCode::parse(code)?;
        if self.neighbors(state).is_none() {
            return Err(PlannerError::UnknownState { code: state.code().to_string() });
        }
        Ok(state)
    }

    /// All states in the given region, optionally narrowed to one sub-region.
    /// A whole region is listed division by division, each in table order.
    pub fn states_by_region(&self, top: Region, sub: Option<SubRegion>) -> Vec<StateCode> {
        let subs = match &sub {
            Some(sub) => std::slice::from_ref(sub),
            None => top.sub_regions(),
        };
        subs.iter()
            .flat_map(|&sub| {
                let wanted = Classification { top, sub };
                StateCode::all().filter(move |&s| self.classify(s) == Some(wanted))
            })
            .collect()
    }
}

impl BorderSource for Registry {
    #[inline(always)]
    fn neighbors(&self, state: StateCode) -> Option<&[StateCode]> {
        let (start, count) = (*self.neighbor_ranges.get(state.index())?)?;
        Some(&self.neighbors_flat[start as usize..(start + count) as usize])
    }
}

impl RegionSource for Registry {
    fn classify(&self, state: StateCode) -> Option<Classification> {
        STATES[state.index()].class
    }
}
