use crate::_impl_labeled_graph::signed_directed_graph::SdGraph;
use crate::{EdgeSign, VertexId};
use std::collections::{BTreeMap, HashSet};

impl SdGraph {
    /// Find all non-trivial strongly connected components of this `SdGraph`.
    ///
    /// The result is sorted by component size.
    pub fn strongly_connected_components(&self) -> Vec<HashSet<VertexId>> {
        let mut results = Vec::new();
        scc_recursive(self, self.mk_all_vertices(), &mut results);
        results.sort_by_key(|it| it.len());
        results
    }
}

/// **(internal)** A recursive procedure for finding non-trivial SCCs in a restricted
/// vertex set.
///
/// The complexity of the procedure is $n^2$, which is more than enough for networks
/// of the size we are dealing with.
fn scc_recursive(
    graph: &SdGraph,
    mut universe: HashSet<VertexId>,
    results: &mut Vec<HashSet<VertexId>>,
) {
    trim_trivial(&graph.successors, &mut universe);
    trim_trivial(&graph.predecessors, &mut universe);

    // Smallest vertex as pivot keeps the decomposition order deterministic.
    let Some(pivot) = universe.iter().min().copied() else {
        return;
    };

    let fwd = graph.restricted_forward_reachable(&universe, HashSet::from([pivot]));
    let bwd = graph.restricted_backward_reachable(&universe, HashSet::from([pivot]));

    let fwd_or_bwd: HashSet<VertexId> = fwd.union(&bwd).cloned().collect();
    let fwd_and_bwd: HashSet<VertexId> = fwd.intersection(&bwd).cloned().collect();

    if is_non_trivial(graph, &fwd_and_bwd) {
        results.push(fwd_and_bwd);
    }

    let universe_rest: HashSet<VertexId> = universe.difference(&fwd_or_bwd).cloned().collect();
    let fwd_rest: HashSet<VertexId> = fwd.difference(&bwd).cloned().collect();
    let bwd_rest: HashSet<VertexId> = bwd.difference(&fwd).cloned().collect();

    for rest in [universe_rest, fwd_rest, bwd_rest] {
        if !rest.is_empty() {
            scc_recursive(graph, rest, results);
        }
    }
}

/// **(internal)** Check if an SCC is non-trivial, i.e. it has more than one vertex,
/// or its only vertex has a self-loop.
///
/// Note that this does not verify that the set is an actual SCC.
fn is_non_trivial(graph: &SdGraph, scc: &HashSet<VertexId>) -> bool {
    if scc.len() > 1 {
        return true;
    }
    scc.iter().any(|vertex| {
        graph
            .successors
            .get(vertex)
            .map_or(false, |next| next.iter().any(|(x, _)| x == vertex))
    })
}

/// **(internal)** Remove all vertices from `set` that can be trivially shown to be outside
/// of any cycle using the given `edge` set.
///
/// Note that this does not eliminate *all* trivial SCCs, just a part of them that can be
/// detected using this particular method.
fn trim_trivial(
    edges: &BTreeMap<VertexId, Vec<(VertexId, EdgeSign)>>,
    set: &mut HashSet<VertexId>,
) {
    let mut continue_trimming = true;
    while continue_trimming {
        continue_trimming = false;
        for x in set.clone() {
            let non_trivial = edges
                .get(&x)
                .map_or(false, |next| next.iter().any(|(y, _)| set.contains(y)));
            if !non_trivial {
                set.remove(&x);
                continue_trimming = true;
            }
        }
    }
}
