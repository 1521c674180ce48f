use crate::_impl_labeled_graph::signed_directed_graph::SdGraph;
use crate::VertexId;
use std::collections::HashSet;

impl SdGraph {
    /// The list of all weakly connected components in this graph.
    pub fn weakly_connected_components(&self) -> Vec<HashSet<VertexId>> {
        self.restricted_weakly_connected_components(&self.mk_all_vertices())
    }

    /// Weakly connected components within the sub-graph induced by the given `restriction` set.
    ///
    /// Components are ordered by their smallest vertex.
    pub fn restricted_weakly_connected_components(
        &self,
        restriction: &HashSet<VertexId>,
    ) -> Vec<HashSet<VertexId>> {
        let mut result = Vec::new();
        let mut remaining = restriction.clone();
        while let Some(pivot) = remaining.iter().min().copied() {
            let mut component = HashSet::from([pivot]);
            loop {
                let fwd = self.restricted_forward_reachable(&remaining, component.clone());
                let bwd = self.restricted_backward_reachable(&remaining, component.clone());
                if fwd.is_subset(&component) && bwd.is_subset(&component) {
                    break;
                }
                component.extend(fwd);
                component.extend(bwd);
            }
            tracing::trace!(size = component.len(), "Found weak component.");
            remaining.retain(|it| !component.contains(it));
            result.push(component);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{LabeledGraph, SdGraph, VertexId};
    use std::collections::HashSet;

    #[test]
    fn test_weakly_connected() {
        let graph = LabeledGraph::try_from_spec(
            "a : (c) : E\nb : (a + d) : E\nc : (b) : E\nd :  : E\ne : (c) : E\n",
        )
        .unwrap();
        let sd = SdGraph::from(&graph);

        assert_eq!(sd.weakly_connected_components().len(), 1);
        let restriction =
            HashSet::from_iter([VertexId::from_index(3), VertexId::from_index(4)]);
        assert_eq!(sd.restricted_weakly_connected_components(&restriction).len(), 2);

        let graph =
            LabeledGraph::try_from_spec("a : (b) : E\nb : (a) : E\nc :  : E\nd : (c) : E\n")
                .unwrap();
        let sd = SdGraph::from(&graph);
        assert_eq!(sd.weakly_connected_components().len(), 2);
        assert!(!graph.is_weakly_connected());
        assert!(!graph.is_feed_forward());
        assert!(LabeledGraph::new().weakly_connected_components().is_empty());
        assert!(!LabeledGraph::new().is_weakly_connected());
        assert!(!LabeledGraph::new().is_strongly_connected());
    }
}
