//! Exhaustive enumeration of covering paths through a bounded border graph.
//!
//! A covering path visits every member of the working subset exactly once and
//! only steps between states that border each other inside the subset. The
//! search is a plain backtracking DFS and is factorial in the subset size in
//! the worst case; it is meant for a handful of states, not a continent.

use super::topology::{BoundedBorders, WorkingSubset};
use crate::error::PlannerError;
use crate::store::StateCode;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A completed covering path, in travel order.
pub type Path = Vec<StateCode>;

/// Recursion-local partial path. Doubles as the visited set.
type History = SmallVec<[StateCode; 16]>;

/// Optional constraints on an enumeration run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathQuery {
    pub start: Option<StateCode>,
    pub end: Option<StateCode>,
    /// Stop once this many paths have been recorded.
    pub max_paths: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Enumeration {
    pub paths: Vec<Path>,
    /// True when `max_paths` cut the search short.
    pub truncated: bool,
}

/// Enumerates every covering path of `subset` over `borders`.
///
/// With a fixed start the search is rooted there only; otherwise one search
/// runs from each member in subset order and the results are concatenated in
/// that order. With a fixed end only paths finishing there are kept.
pub fn enumerate(
    subset: &WorkingSubset,
    borders: &BoundedBorders,
    query: &PathQuery,
) -> Result<Enumeration, PlannerError> {
    if let Some(start) = query.start {
        if !subset.contains(start) {
            return Err(PlannerError::StartNotInSubset { code: start.code().to_string() });
        }
    }
    if let Some(end) = query.end {
        if !subset.contains(end) {
            return Err(PlannerError::EndNotInSubset { code: end.code().to_string() });
        }
    }

    if subset.is_empty() || !borders.is_connected() {
        tracing::debug!(states = subset.len(), "subset is empty or disconnected, no covering path exists");
        return Ok(Enumeration::default());
    }

    let roots: Vec<StateCode> = match query.start {
        Some(start) => vec![start],
        None => subset.members().to_vec(),
    };
    let target = subset.len();

    // Each root gets its own accumulator; collect() keeps root order.
    let per_root: Vec<PathSink> = roots
        .par_iter()
        .map(|&root| {
            let mut sink = PathSink::new(query.max_paths);
            let mut history = History::new();
            visit(root, borders, target, query.end, &mut history, &mut sink);
            tracing::debug!(root = %root, paths = sink.paths.len(), "finished root");
            sink
        })
        .collect();

    let mut result = Enumeration::default();
    for sink in per_root {
        result.truncated |= sink.truncated;
        result.paths.extend(sink.paths);
    }
    if let Some(cap) = query.max_paths {
        if result.paths.len() > cap {
            result.paths.truncate(cap);
            result.truncated = true;
        }
    }

    tracing::info!("found {} possible paths through {} states", result.paths.len(), target);
    Ok(result)
}

struct PathSink {
    paths: Vec<Path>,
    cap: Option<usize>,
    truncated: bool,
}

impl PathSink {
    fn new(cap: Option<usize>) -> Self {
        Self { paths: Vec::new(), cap, truncated: false }
    }

    fn is_full(&self) -> bool {
        self.cap.is_some_and(|cap| self.paths.len() >= cap)
    }
}

fn visit(
    state: StateCode,
    borders: &BoundedBorders,
    target: usize,
    end: Option<StateCode>,
    history: &mut History,
    sink: &mut PathSink,
) {
    history.push(state);

    if history.len() == target {
        if end.map_or(true, |e| e == state) {
            if sink.is_full() {
                sink.truncated = true;
            } else {
                sink.paths.push(history.to_vec());
            }
        }
        history.pop();
        return;
    }

    for &next in borders.get(state) {
        if sink.truncated {
            break;
        }
        if !history.contains(&next) {
            visit(next, borders, target, end, history, sink);
        }
    }

    history.pop();
}
