use crate::{EdgeSign, LabeledGraph, VertexId};
use std::collections::{BTreeMap, HashSet};

/// **(internal)** Basic utility methods for manipulating the `SdGraph`.
mod _impl_sd_graph;

/// **(internal)** Compute basic reachability properties within the `SdGraph`.
mod _reachability;

/// **(internal)** Perform a decomposition of the signed directed graph (or its subgraph)
/// into strongly connected components.
mod _strongly_connected_components;

/// **(internal)** Perform decomposition of the signed directed graph (or its subgraph)
/// into weakly connected components.
mod _weakly_connected_components;

/// A read-only snapshot of a `LabeledGraph` with explicit successor and predecessor lists.
///
/// The `LabeledGraph` itself only stores successors, which keeps mutation cheap. The
/// structural algorithms, on the other hand, need fast access in both directions, so they
/// work on this representation instead.
#[derive(Clone, Debug)]
pub struct SdGraph {
    successors: BTreeMap<VertexId, Vec<(VertexId, EdgeSign)>>,
    predecessors: BTreeMap<VertexId, Vec<(VertexId, EdgeSign)>>,
}

/// Algorithms for analysing the underlying signed directed graph.
impl LabeledGraph {
    /// Compute all *non-trivial* strongly connected components of this graph.
    ///
    /// A single vertex is a non-trivial component only when it has a self-loop. The result
    /// is sorted by component size.
    pub fn strongly_connected_components(&self) -> Vec<HashSet<VertexId>> {
        SdGraph::from(self).strongly_connected_components()
    }

    /// Compute all weakly connected components of this graph.
    pub fn weakly_connected_components(&self) -> Vec<HashSet<VertexId>> {
        SdGraph::from(self).weakly_connected_components()
    }

    /// True if the graph is non-empty and connected when edge directions are ignored.
    pub fn is_weakly_connected(&self) -> bool {
        self.num_vertices() > 0 && self.weakly_connected_components().len() == 1
    }

    /// True if the graph is non-empty and every vertex can reach every other vertex.
    pub fn is_strongly_connected(&self) -> bool {
        let graph = SdGraph::from(self);
        let all = graph.mk_all_vertices();
        let Some(pivot) = self.vertices().next() else {
            return false;
        };
        graph.forward_reachable(HashSet::from([pivot])) == all
            && graph.backward_reachable(HashSet::from([pivot])) == all
    }

    /// True if the graph has no cycle of length two or more.
    ///
    /// Self-loops are allowed, i.e. every strongly connected component has size one.
    pub fn is_feed_forward(&self) -> bool {
        self.strongly_connected_components()
            .iter()
            .all(|component| component.len() <= 1)
    }
}
