use crate::_impl_labeled_graph::signed_directed_graph::SdGraph;
use crate::{EdgeSign, VertexId};
use std::collections::{BTreeMap, HashSet};

type EdgeLists = BTreeMap<VertexId, Vec<(VertexId, EdgeSign)>>;

impl SdGraph {
    /// Return the set of vertices forward-reachable from the `initial` set.
    pub fn forward_reachable(&self, initial: HashSet<VertexId>) -> HashSet<VertexId> {
        reachability(&self.successors, initial, None)
    }

    /// Return the set of vertices backward-reachable from the `initial` set.
    pub fn backward_reachable(&self, initial: HashSet<VertexId>) -> HashSet<VertexId> {
        reachability(&self.predecessors, initial, None)
    }

    /// Return the set of vertices forward-reachable from the `initial` set within
    /// the `restriction` set.
    pub fn restricted_forward_reachable(
        &self,
        restriction: &HashSet<VertexId>,
        initial: HashSet<VertexId>,
    ) -> HashSet<VertexId> {
        reachability(&self.successors, initial, Some(restriction))
    }

    /// Return the set of vertices backward-reachable from the `initial` set within
    /// the `restriction` set.
    pub fn restricted_backward_reachable(
        &self,
        restriction: &HashSet<VertexId>,
        initial: HashSet<VertexId>,
    ) -> HashSet<VertexId> {
        reachability(&self.predecessors, initial, Some(restriction))
    }
}

/// **(internal)** A shared utility method that implements either forward or backward
/// reachability depending on the supplied `SdGraph` edge relation. When a `universe` is
/// given, the search never leaves it.
fn reachability(
    edges: &EdgeLists,
    initial: HashSet<VertexId>,
    universe: Option<&HashSet<VertexId>>,
) -> HashSet<VertexId> {
    let mut result = initial;
    let mut frontier = result.clone();
    while !frontier.is_empty() {
        let mut new_frontier = HashSet::new();
        for x in frontier {
            for (step, _) in edges.get(&x).into_iter().flatten() {
                let allowed = universe.map_or(true, |it| it.contains(step));
                if allowed && result.insert(*step) {
                    new_frontier.insert(*step);
                }
            }
        }
        frontier = new_frontier;
    }
    result
}
