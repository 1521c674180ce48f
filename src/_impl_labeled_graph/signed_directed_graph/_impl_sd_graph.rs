use crate::_impl_labeled_graph::signed_directed_graph::SdGraph;
use crate::{LabeledGraph, VertexId};
use std::collections::{BTreeMap, HashSet};

impl SdGraph {
    pub fn mk_all_vertices(&self) -> HashSet<VertexId> {
        self.successors.keys().copied().collect()
    }
}

impl From<&LabeledGraph> for SdGraph {
    fn from(graph: &LabeledGraph) -> Self {
        let mut successors: BTreeMap<_, Vec<_>> =
            graph.vertices().map(|v| (v, Vec::new())).collect();
        let mut predecessors: BTreeMap<_, Vec<_>> =
            graph.vertices().map(|v| (v, Vec::new())).collect();
        for (source, target, sign) in graph.edges() {
            if let Some(next_step) = successors.get_mut(&source) {
                next_step.push((target, sign));
            }
            if let Some(prev_step) = predecessors.get_mut(&target) {
                prev_step.push((source, sign));
            }
        }
        SdGraph {
            successors,
            predecessors,
        }
    }
}
