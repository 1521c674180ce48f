use crate::{Edge, EdgeSign, LabeledGraph, PerturbError, VertexId, VertexIdIterator};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Index;

/// Methods for safely constructing and modifying `LabeledGraph`s.
impl LabeledGraph {
    /// Create a new empty `LabeledGraph`.
    pub fn new() -> LabeledGraph {
        LabeledGraph::default()
    }

    /// Add a new vertex with the given `label` and return its identifier.
    ///
    /// The identifier is always fresh, i.e. larger than any identifier that was ever used
    /// in this graph.
    pub fn add_vertex(&mut self, label: &str) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.labels.insert(id, label.to_string());
        self.successors.insert(id, BTreeMap::new());
        id
    }

    /// Add an edge `source -> target` with the given `sign`.
    ///
    /// Endpoints that are not in the graph yet are created with an empty label. Since
    /// the graph is simple, an existing `source -> target` edge is replaced and its
    /// previous sign is returned.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        sign: EdgeSign,
    ) -> Option<EdgeSign> {
        self.ensure_vertex(source);
        self.ensure_vertex(target);
        self.successors
            .get_mut(&source)
            .and_then(|targets| targets.insert(target, sign))
    }

    /// Remove the edge `source -> target`, returning its sign if it existed.
    pub fn remove_edge(&mut self, source: VertexId, target: VertexId) -> Option<EdgeSign> {
        self.successors
            .get_mut(&source)
            .and_then(|targets| targets.remove(&target))
    }

    /// Remove a vertex together with all its incident edges.
    ///
    /// Returns the number of edges that were removed along with the vertex (a self-loop
    /// is counted once). Removing a vertex that is not in the graph does nothing.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> usize {
        if self.labels.remove(&vertex).is_none() {
            return 0;
        }
        let mut removed = self
            .successors
            .remove(&vertex)
            .map(|targets| targets.len())
            .unwrap_or(0);
        for targets in self.successors.values_mut() {
            if targets.remove(&vertex).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Check that this graph has no self-repressing edge.
    ///
    /// A self-repression cannot appear in an essential network specification, hence a graph
    /// which has one is not a valid search seed.
    pub fn validate(&self) -> Result<(), PerturbError> {
        for (source, target, sign) in self.edges() {
            if source == target && sign == EdgeSign::Repression {
                return Err(PerturbError::SelfRepression(self[source].to_string()));
            }
        }
        Ok(())
    }

    /// Create a copy of this graph with all edges reversed.
    ///
    /// Vertex identifiers and labels are preserved.
    pub fn transpose(&self) -> LabeledGraph {
        let mut result = LabeledGraph {
            labels: self.labels.clone(),
            successors: self.labels.keys().map(|v| (*v, BTreeMap::new())).collect(),
            next_id: self.next_id,
        };
        for (source, target, sign) in self.edges() {
            result.add_edge(target, source, sign);
        }
        result
    }

    /// **(internal)** Make sure `vertex` exists, creating it with an empty label if necessary.
    fn ensure_vertex(&mut self, vertex: VertexId) {
        if !self.labels.contains_key(&vertex) {
            self.labels.insert(vertex, String::new());
            self.successors.insert(vertex, BTreeMap::new());
            self.next_id = self.next_id.max(vertex.0 + 1);
        }
    }
}

/// Some basic utility methods for inspecting the `LabeledGraph`.
impl LabeledGraph {
    /// The number of vertices in this `LabeledGraph`.
    pub fn num_vertices(&self) -> usize {
        self.labels.len()
    }

    /// The number of edges in this `LabeledGraph`.
    pub fn num_edges(&self) -> usize {
        self.successors.values().map(|it| it.len()).sum()
    }

    /// True if `vertex` is a vertex of this graph.
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.labels.contains_key(&vertex)
    }

    /// Return an iterator over all vertex ids of this graph, in increasing order.
    pub fn vertices(&self) -> VertexIdIterator {
        self.labels.keys().copied()
    }

    /// The label of the given `vertex`, or `None` if the vertex does not exist.
    pub fn get_label(&self, vertex: VertexId) -> Option<&str> {
        self.labels.get(&vertex).map(|it| it.as_str())
    }

    /// The set of all vertex labels of this graph.
    pub fn label_set(&self) -> BTreeSet<&str> {
        self.labels.values().map(|it| it.as_str()).collect()
    }

    /// Find the vertex with the given `label`.
    ///
    /// Returns `None` if there is no such vertex and an error if the label is not unique.
    pub fn find_vertex(&self, label: &str) -> Result<Option<VertexId>, PerturbError> {
        let matching = self
            .labels
            .iter()
            .filter(|(_, it)| it.as_str() == label)
            .map(|(v, _)| *v)
            .collect::<Vec<_>>();
        match matching.len() {
            0 => Ok(None),
            1 => Ok(Some(matching[0])),
            _ => Err(PerturbError::AmbiguousLabel {
                label: label.to_string(),
                vertices: matching,
            }),
        }
    }

    /// The sign of the edge `source -> target`, or `None` if there is no such edge.
    pub fn get_edge_sign(&self, source: VertexId, target: VertexId) -> Option<EdgeSign> {
        self.successors
            .get(&source)
            .and_then(|targets| targets.get(&target))
            .copied()
    }

    /// Return a sorted list of vertices that are targets of an edge starting in `vertex`.
    pub fn successors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.successors
            .get(&vertex)
            .map(|targets| targets.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Return a sorted list of `(source, sign)` pairs of all edges that end in `vertex`.
    ///
    /// There is no reverse index, hence this requires a scan over the whole graph.
    pub fn in_edges(&self, vertex: VertexId) -> Vec<(VertexId, EdgeSign)> {
        self.successors
            .iter()
            .filter_map(|(source, targets)| targets.get(&vertex).map(|sign| (*source, *sign)))
            .collect()
    }

    /// Return a sorted list of vertices that are sources of an edge ending in `vertex`.
    pub fn predecessors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.in_edges(vertex).into_iter().map(|(v, _)| v).collect()
    }

    /// The number of edges starting in `vertex`.
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.successors.get(&vertex).map(|it| it.len()).unwrap_or(0)
    }

    /// The number of edges ending in `vertex`.
    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.successors
            .values()
            .filter(|targets| targets.contains_key(&vertex))
            .count()
    }

    /// Materialize a sorted list of all edges of this graph.
    ///
    /// The list is recomputed on every call.
    pub fn edges(&self) -> Vec<Edge> {
        self.successors
            .iter()
            .flat_map(|(source, targets)| {
                targets
                    .iter()
                    .map(move |(target, sign)| (*source, *target, *sign))
            })
            .collect()
    }
}

/// Allow indexing `LabeledGraph` using `VertexId` objects to obtain vertex labels.
impl Index<VertexId> for LabeledGraph {
    type Output = str;

    fn index(&self, index: VertexId) -> &Self::Output {
        self.labels[&index].as_str()
    }
}
