use crate::perturbation::_impl_mutator::label_index;
use crate::perturbation::{AbortReason, MissingEdge, Mutator};
use crate::{EdgeSign, LabeledGraph, VertexId};
use rand::seq::SliceRandom;
use rand::Rng;

impl Mutator {
    /// Make sure every vertex in `vertices` has at least one incoming and one outgoing edge.
    ///
    /// Vertices that are missing an edge are processed in random order. Every missing edge is
    /// either drawn from the edge allow-list (when it is not empty), or connects the vertex
    /// to a uniformly chosen different vertex using a random sign. An added edge can satisfy
    /// the needs of two vertices at once. Returns the number of added edges.
    ///
    /// Vertices that are not in `graph` are ignored.
    pub fn complete_degree<R: Rng + ?Sized>(
        &self,
        graph: &mut LabeledGraph,
        vertices: &[VertexId],
        rng: &mut R,
    ) -> Result<usize, AbortReason> {
        let mut added = 0;
        loop {
            let missing = missing_edges(graph, vertices);
            let Some((vertex, direction)) = missing.choose(rng).copied() else {
                return Ok(added);
            };
            let (source, target, sign) = if self.edge_pool.is_empty() {
                synthetic_edge(graph, vertex, direction, rng)
            } else {
                self.pool_edge_for(graph, vertex, direction, rng)?
            };
            graph.add_edge(source, target, sign);
            added += 1;
        }
    }

    /// **(internal)** Pick an allow-listed edge that gives `vertex` the missing edge in
    /// the given `direction`. The other endpoint must already be in the graph.
    fn pool_edge_for<R: Rng + ?Sized>(
        &self,
        graph: &LabeledGraph,
        vertex: VertexId,
        direction: MissingEdge,
        rng: &mut R,
    ) -> Result<(VertexId, VertexId, EdgeSign), AbortReason> {
        let index = label_index(graph);
        let name = &graph[vertex];
        let candidates = self
            .edge_pool
            .iter()
            .filter_map(|edge| {
                let (own, other) = match direction {
                    MissingEdge::Incoming => (edge.get_target(), edge.get_source()),
                    MissingEdge::Outgoing => (edge.get_source(), edge.get_target()),
                };
                if own != name {
                    return None;
                }
                let other = *index.get(other)?;
                Some(match direction {
                    MissingEdge::Incoming => (other, vertex, edge.get_sign()),
                    MissingEdge::Outgoing => (vertex, other, edge.get_sign()),
                })
            })
            .collect::<Vec<_>>();
        candidates
            .choose(rng)
            .copied()
            .ok_or(AbortReason::NoCompatibleEdge)
    }
}

/// All `(vertex, direction)` pairs where a vertex from `vertices` has no edge in
/// the given direction. Vertices that are not in `graph` are skipped.
pub fn missing_edges(graph: &LabeledGraph, vertices: &[VertexId]) -> Vec<(VertexId, MissingEdge)> {
    let mut missing = Vec::new();
    for vertex in vertices.iter().copied() {
        if !graph.contains_vertex(vertex) {
            continue;
        }
        if graph.out_degree(vertex) == 0 {
            missing.push((vertex, MissingEdge::Outgoing));
        }
        if graph.in_degree(vertex) == 0 {
            missing.push((vertex, MissingEdge::Incoming));
        }
    }
    missing
}

/// **(internal)** An edge between `vertex` and a random other vertex, in the given `direction`.
///
/// In a graph with a single vertex, the only option is a self-activation. A vertex that is
/// missing an edge has no edge in that direction, so the result never replaces an existing
/// edge of `vertex` in that direction.
fn synthetic_edge<R: Rng + ?Sized>(
    graph: &LabeledGraph,
    vertex: VertexId,
    direction: MissingEdge,
    rng: &mut R,
) -> (VertexId, VertexId, EdgeSign) {
    let others = graph.vertices().filter(|v| *v != vertex).collect::<Vec<_>>();
    let Some(other) = others.choose(rng).copied() else {
        return (vertex, vertex, EdgeSign::Activation);
    };
    let sign = EdgeSign::random(rng);
    match direction {
        MissingEdge::Incoming => (other, vertex, sign),
        MissingEdge::Outgoing => (vertex, other, sign),
    }
}
