//! Restriction of the border table to a working subset of states.

use crate::error::PlannerError;
use crate::store::{BorderSource, StateCode};
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Dfs;
use std::collections::HashMap;

/// The caller-chosen states for one enumeration run. Members are distinct and
/// keep the order in which they were first supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingSubset {
    members: Vec<StateCode>,
}

impl WorkingSubset {
    pub fn new(states: impl IntoIterator<Item = StateCode>) -> Self {
        let mut members = Vec::new();
        for s in states {
            if !members.contains(&s) {
                members.push(s);
            }
        }
        Self { members }
    }

    /// Resolves raw codes against `source`. Codes that are unknown, or known
    /// but without a border entry, are returned as issues and left out.
    pub fn resolve<S: AsRef<str>>(codes: &[S], source: &impl BorderSource) -> (Self, Vec<PlannerError>) {
        let mut states = Vec::with_capacity(codes.len());
        let mut issues = Vec::new();

        for raw in codes {
            match StateCode::parse(raw.as_ref()) {
                Ok(state) if source.neighbors(state).is_some() => states.push(state),
                Ok(state) => issues.push(PlannerError::UnknownState { code: state.code().to_string() }),
                Err(e) => issues.push(e),
            }
        }
        for issue in &issues {
            tracing::warn!("skipping state: {}", issue);
        }
        (Self::new(states), issues)
    }

    pub fn members(&self) -> &[StateCode] { &self.members }
    pub fn len(&self) -> usize { self.members.len() }
    pub fn is_empty(&self) -> bool { self.members.is_empty() }
    pub fn contains(&self, state: StateCode) -> bool { self.members.contains(&state) }
}

/// Border lists restricted to the members of a `WorkingSubset`.
///
/// Every key and every listed neighbour is a subset member, and neighbour lists
/// keep the order of the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedBorders {
    members: Vec<StateCode>,
    neighbors: HashMap<StateCode, Vec<StateCode>>,
}

impl BoundedBorders {
    /// Fails on the first member that has no entry in `source`, so callers can
    /// tell an unknown state from a state with no in-subset neighbours.
    pub fn build(subset: &WorkingSubset, source: &impl BorderSource) -> Result<Self, PlannerError> {
        let mut neighbors = HashMap::with_capacity(subset.len());

        for &state in subset.members() {
            let full = source
                .neighbors(state)
                .ok_or_else(|| PlannerError::UnknownState { code: state.code().to_string() })?;
            let bounded: Vec<StateCode> = full.iter().copied().filter(|n| subset.contains(*n)).collect();
            neighbors.insert(state, bounded);
        }

        Ok(Self { members: subset.members().to_vec(), neighbors })
    }

    pub fn members(&self) -> &[StateCode] { &self.members }

    pub fn get(&self, state: StateCode) -> &[StateCode] {
        self.neighbors.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn borders(&self, a: StateCode, b: StateCode) -> bool {
        self.get(a).contains(&b)
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn to_graph(&self) -> UnGraphMap<StateCode, ()> {
        let mut graph = UnGraphMap::with_capacity(self.members.len(), self.edge_count());
        for &s in &self.members {
            graph.add_node(s);
        }
        for &s in &self.members {
            for &n in self.get(s) {
                graph.add_edge(s, n, ());
            }
        }
        graph
    }

    /// True when every member is reachable from every other. A covering path
    /// can only exist through a connected subset.
    pub fn is_connected(&self) -> bool {
        let Some(&first) = self.members.first() else { return true };
        let graph = self.to_graph();
        let mut dfs = Dfs::new(&graph, first);
        let mut reached = 0;
        while dfs.next(&graph).is_some() {
            reached += 1;
        }
        reached == self.members.len()
    }
}

impl BorderSource for BoundedBorders {
    fn neighbors(&self, state: StateCode) -> Option<&[StateCode]> {
        self.neighbors.get(&state).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Registry;

    fn subset(codes: &[&str]) -> WorkingSubset {
        WorkingSubset::new(codes.iter().map(|c| StateCode::parse(c).unwrap()))
    }

    fn s(code: &str) -> StateCode { StateCode::parse(code).unwrap() }

    #[test]
    fn test_restricts_to_members() {
        let bounded = BoundedBorders::build(&subset(&["OR", "WA", "CA"]), Registry::global()).unwrap();
        assert_eq!(bounded.get(s("OR")), &[s("WA"), s("CA")]);
        assert_eq!(bounded.get(s("WA")), &[s("OR")]);
        assert_eq!(bounded.get(s("CA")), &[s("OR")]);
        assert!(!bounded.borders(s("WA"), s("CA")));
        assert_eq!(bounded.edge_count(), 2);
    }

    #[test]
    fn test_unknown_member_is_an_error() {
        let err = BoundedBorders::build(&subset(&["OR", "AK"]), Registry::global()).unwrap_err();
        assert_eq!(err, PlannerError::UnknownState { code: "AK".into() });
    }

    #[test]
    fn test_isolated_member_has_empty_list() {
        let bounded = BoundedBorders::build(&subset(&["OR", "ME"]), Registry::global()).unwrap();
        assert_eq!(bounded.neighbors(s("ME")), Some(&[][..]));
        assert!(!bounded.is_connected());
    }

    #[test]
    fn test_resolve_collects_issues_and_dedupes() {
        let (ws, issues) = WorkingSubset::resolve(&["or", "ZZ", "WA", "HI", "or"], Registry::global());
        assert_eq!(ws.members(), &[s("OR"), s("WA")]);
        assert_eq!(
            issues,
            vec![
                PlannerError::UnknownState { code: "ZZ".into() },
                PlannerError::UnknownState { code: "HI".into() },
            ]
        );
    }

    #[test]
    fn test_connectivity() {
        let four_corners = BoundedBorders::build(&subset(&["AZ", "NM", "UT", "CO"]), Registry::global()).unwrap();
        assert!(four_corners.is_connected());
        assert_eq!(four_corners.to_graph().edge_count(), 4);
        assert!(BoundedBorders::default().is_connected());
    }
}
