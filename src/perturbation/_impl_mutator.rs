use crate::perturbation::{AbortReason, Mutator, OperationCounts};
use crate::{Edge, EdgeSign, LabeledGraph, PoolEdge, VertexId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Prefix of synthetic node names.
const FRESH_NAME_PREFIX: &str = "x";

impl Mutator {
    /// Create a new `Mutator` with the given allow-lists.
    ///
    /// Both lists are sorted and deduplicated so that random choices from them only depend
    /// on the random number generator. Self-repressing edges are dropped from
    /// the `edge_pool`, since they can never be part of a valid network.
    pub fn new(node_pool: Vec<String>, edge_pool: Vec<PoolEdge>, dsgrn_optimized: bool) -> Mutator {
        let mut node_pool = node_pool;
        node_pool.sort();
        node_pool.dedup();
        let mut edge_pool = edge_pool
            .into_iter()
            .filter(|edge| {
                if edge.is_self_repression() {
                    tracing::debug!(edge = %edge, "Dropping self-repressing edge from edge list.");
                }
                !edge.is_self_repression()
            })
            .collect::<Vec<_>>();
        edge_pool.sort();
        edge_pool.dedup();
        Mutator {
            node_pool,
            edge_pool,
            dsgrn_optimized,
        }
    }

    pub fn node_pool(&self) -> &[String] {
        &self.node_pool
    }

    pub fn edge_pool(&self) -> &[PoolEdge] {
        &self.edge_pool
    }

    pub fn is_dsgrn_optimized(&self) -> bool {
        self.dsgrn_optimized
    }

    /// Apply the scheduled operations to `graph`.
    ///
    /// The random number generator is consumed in a fixed order: node removals, edge
    /// removals, node names, degree completion, edge additions. On error, `graph`
    /// is left in a partially mutated state and should be discarded.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        graph: &mut LabeledGraph,
        counts: &OperationCounts,
        rng: &mut R,
    ) -> Result<(), AbortReason> {
        let destroyed = self.remove_nodes(graph, counts.remove_nodes, rng)?;
        self.remove_edges(graph, counts.remove_edges.saturating_sub(destroyed), rng)?;

        let new_vertices = self.add_nodes(graph, counts.add_nodes, rng);
        self.complete_degree(graph, &new_vertices, rng)?;

        let mut remaining = counts.add_edges;
        if self.dsgrn_optimized {
            let all_vertices = graph.vertices().collect::<Vec<_>>();
            let added = self.complete_degree(graph, &all_vertices, rng)?;
            remaining = remaining
                .checked_sub(added)
                .ok_or(AbortReason::EdgeBudgetExceeded)?;
        }

        self.add_edges(graph, remaining, rng)
    }

    /// Remove `count` uniformly chosen vertices from `graph`.
    ///
    /// Returns the number of edges destroyed together with the removed vertices. At least
    /// one vertex must always survive.
    pub fn remove_nodes<R: Rng + ?Sized>(
        &self,
        graph: &mut LabeledGraph,
        count: usize,
        rng: &mut R,
    ) -> Result<usize, AbortReason> {
        if count == 0 {
            return Ok(0);
        }
        if count >= graph.num_vertices() {
            return Err(AbortReason::TooManyNodeRemovals);
        }
        let mut destroyed = 0;
        for _ in 0..count {
            let vertices = graph.vertices().collect::<Vec<_>>();
            let Some(vertex) = vertices.choose(rng) else {
                return Err(AbortReason::TooManyNodeRemovals);
            };
            destroyed += graph.remove_vertex(*vertex);
        }
        Ok(destroyed)
    }

    /// Remove `count` uniformly chosen edges from `graph`. At least one edge must
    /// always survive.
    pub fn remove_edges<R: Rng + ?Sized>(
        &self,
        graph: &mut LabeledGraph,
        count: usize,
        rng: &mut R,
    ) -> Result<(), AbortReason> {
        if count == 0 {
            return Ok(());
        }
        if count >= graph.num_edges() {
            return Err(AbortReason::TooManyEdgeRemovals);
        }
        for _ in 0..count {
            let edges = graph.edges();
            let Some((source, target, _)) = edges.choose(rng) else {
                return Err(AbortReason::TooManyEdgeRemovals);
            };
            graph.remove_edge(*source, *target);
        }
        Ok(())
    }

    /// Add up to `count` new vertices to `graph` and return their identifiers.
    ///
    /// Without a node allow-list, every vertex gets the name `x<k>` with the smallest `k`
    /// that is not used yet. Otherwise, names are drawn uniformly from the allow-listed
    /// names that are not in the graph yet. When the allow-list runs out, fewer vertices
    /// are added.
    pub fn add_nodes<R: Rng + ?Sized>(
        &self,
        graph: &mut LabeledGraph,
        count: usize,
        rng: &mut R,
    ) -> Vec<VertexId> {
        let mut added = Vec::new();
        for _ in 0..count {
            let label = {
                let labels = graph.label_set();
                if self.node_pool.is_empty() {
                    (1..)
                        .map(|k| format!("{}{}", FRESH_NAME_PREFIX, k))
                        .find(|name| !labels.contains(name.as_str()))
                } else {
                    let available = self
                        .node_pool
                        .iter()
                        .filter(|name| !labels.contains(name.as_str()))
                        .collect::<Vec<_>>();
                    available.choose(rng).map(|name| name.to_string())
                }
            };
            match label {
                Some(label) => added.push(graph.add_vertex(&label)),
                None => break,
            }
        }
        added
    }

    /// Add `count` new edges to `graph`.
    ///
    /// Without an edge allow-list, edges are drawn uniformly from all signed edges between
    /// existing vertices that do not connect an already connected pair and are not
    /// self-repressions. Otherwise, they are drawn from the allow-listed edges between
    /// existing vertices that do not connect an already connected pair.
    pub fn add_edges<R: Rng + ?Sized>(
        &self,
        graph: &mut LabeledGraph,
        count: usize,
        rng: &mut R,
    ) -> Result<(), AbortReason> {
        if count == 0 {
            return Ok(());
        }
        let mut candidates = if self.edge_pool.is_empty() {
            free_edge_candidates(graph)
        } else {
            self.pool_edge_candidates(graph)
        };
        for _ in 0..count {
            let Some((source, target, sign)) = candidates.choose(rng).copied() else {
                return Err(AbortReason::EdgeSpaceExhausted);
            };
            graph.add_edge(source, target, sign);
            candidates.retain(|(s, t, _)| (*s, *t) != (source, target));
        }
        Ok(())
    }

    /// **(internal)** Allow-listed edges between vertices of `graph` that connect a pair
    /// of vertices which is not connected yet.
    fn pool_edge_candidates(&self, graph: &LabeledGraph) -> Vec<Edge> {
        let index = label_index(graph);
        let mut candidates = self
            .edge_pool
            .iter()
            .filter_map(|edge| {
                let source = *index.get(edge.get_source())?;
                let target = *index.get(edge.get_target())?;
                Some((source, target, edge.get_sign()))
            })
            .filter(|(s, t, _)| graph.get_edge_sign(*s, *t).is_none())
            .collect::<Vec<_>>();
        candidates.sort();
        candidates
    }
}

/// **(internal)** All signed edges that can be added to `graph` without replacing
/// an existing edge or creating a self-repression.
fn free_edge_candidates(graph: &LabeledGraph) -> Vec<Edge> {
    let mut candidates = Vec::new();
    for source in graph.vertices() {
        for target in graph.vertices() {
            if graph.get_edge_sign(source, target).is_some() {
                continue;
            }
            for sign in EdgeSign::ALL {
                if source != target || sign == EdgeSign::Activation {
                    candidates.push((source, target, sign));
                }
            }
        }
    }
    candidates
}

/// **(internal)** Map from vertex labels to vertices. If labels are not unique,
/// the smallest vertex wins.
pub(crate) fn label_index(graph: &LabeledGraph) -> BTreeMap<&str, VertexId> {
    let mut index = BTreeMap::new();
    for vertex in graph.vertices().rev() {
        index.insert(&graph[vertex], vertex);
    }
    index
}

#[cfg(test)]
mod tests {
    use crate::perturbation::{AbortReason, Mutator, OperationCounts};
    use crate::EdgeSign::{Activation, Repression};
    use crate::{LabeledGraph, PoolEdge};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn seed_graph() -> LabeledGraph {
        LabeledGraph::try_from_spec("A : (A)(~C) : E\nB : (A) : E\nC : (B) : E\n").unwrap()
    }

    #[test]
    fn remove_nodes_counts_destroyed_edges() {
        let mutator = Mutator::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = seed_graph();
        assert_eq!(
            Err(AbortReason::TooManyNodeRemovals),
            mutator.remove_nodes(&mut graph.clone(), 3, &mut rng)
        );
        let destroyed = mutator.remove_nodes(&mut graph, 2, &mut rng).unwrap();
        assert_eq!(1, graph.num_vertices());
        assert_eq!(4 - graph.num_edges(), destroyed);
    }

    #[test]
    fn remove_edges_keeps_vertices() {
        let mutator = Mutator::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut graph = seed_graph();
        assert_eq!(
            Err(AbortReason::TooManyEdgeRemovals),
            mutator.remove_edges(&mut graph.clone(), 4, &mut rng)
        );
        mutator.remove_edges(&mut graph, 3, &mut rng).unwrap();
        assert_eq!(1, graph.num_edges());
        assert_eq!(3, graph.num_vertices());
    }

    #[test]
    fn add_nodes_with_fresh_names() {
        let mutator = Mutator::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut graph = LabeledGraph::try_from_spec("x1 : (x3) : E\nx3 : (x1) : E\n").unwrap();
        let added = mutator.add_nodes(&mut graph, 2, &mut rng);
        assert_eq!(2, added.len());
        assert_eq!("x2", &graph[added[0]]);
        assert_eq!("x4", &graph[added[1]]);
    }

    #[test]
    fn add_nodes_from_exhausted_pool() {
        let pool = vec!["A".to_string(), "D".to_string(), "E".to_string(), "D".to_string()];
        let mutator = Mutator::new(pool, Vec::new(), true);
        assert_eq!(&["A", "D", "E"], mutator.node_pool());
        let mut rng = StdRng::seed_from_u64(4);
        let mut graph = seed_graph();
        let added = mutator.add_nodes(&mut graph, 5, &mut rng);
        assert_eq!(2, added.len());
        let labels = added.iter().map(|v| &graph[*v]).collect::<BTreeSet<_>>();
        assert_eq!(BTreeSet::from(["D", "E"]), labels);
    }

    #[test]
    fn add_edges_without_pool() {
        let mutator = Mutator::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut graph = seed_graph();
        mutator.add_edges(&mut graph, 3, &mut rng).unwrap();
        assert_eq!(7, graph.num_edges());
        assert!(graph.validate().is_ok());

        // 3x3 pairs, all of them connected after the remaining 2 additions.
        mutator.add_edges(&mut graph, 2, &mut rng).unwrap();
        assert_eq!(9, graph.num_edges());
        assert_eq!(
            Err(AbortReason::EdgeSpaceExhausted),
            mutator.add_edges(&mut graph, 1, &mut rng)
        );
    }

    #[test]
    fn add_edges_from_pool() {
        let pool = vec![
            PoolEdge::new("A", "B", Repression), // Pair already connected.
            PoolEdge::new("B", "A", Activation),
            PoolEdge::new("B", "A", Repression),
            PoolEdge::new("C", "C", Repression), // Dropped as self-repression.
            PoolEdge::new("D", "A", Activation), // D is not in the graph.
        ];
        let mutator = Mutator::new(Vec::new(), pool, true);
        assert_eq!(4, mutator.edge_pool().len());
        let mut rng = StdRng::seed_from_u64(6);
        let mut graph = seed_graph();
        mutator.add_edges(&mut graph, 1, &mut rng).unwrap();
        let a = graph.find_vertex("A").unwrap().unwrap();
        let b = graph.find_vertex("B").unwrap().unwrap();
        assert!(graph.get_edge_sign(b, a).is_some());
        assert_eq!(
            Err(AbortReason::EdgeSpaceExhausted),
            mutator.add_edges(&mut graph, 1, &mut rng)
        );
    }

    #[test]
    fn apply_respects_counts() {
        let mutator = Mutator::new(Vec::new(), Vec::new(), true);
        let counts = OperationCounts {
            add_nodes: 0,
            add_edges: 2,
            remove_edges: 0,
            remove_nodes: 0,
        };
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut graph = seed_graph();
            mutator.apply(&mut graph, &counts, &mut rng).unwrap();
            assert_eq!(6, graph.num_edges());
            assert_eq!(3, graph.num_vertices());
        }
    }

    #[test]
    fn apply_charges_degree_completion_to_edge_budget() {
        // B has no outgoing edge, so optimized mode may need an edge that is not scheduled.
        let seed = "A : (A) : E\nB : (A) : E\n";
        let counts = OperationCounts {
            add_nodes: 1,
            add_edges: 0,
            remove_edges: 0,
            remove_nodes: 0,
        };

        let optimized = Mutator::new(Vec::new(), Vec::new(), true);
        let mut aborted = 0;
        for seed_value in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed_value);
            let mut graph = LabeledGraph::try_from_spec(seed).unwrap();
            match optimized.apply(&mut graph, &counts, &mut rng) {
                Err(reason) => {
                    assert_eq!(AbortReason::EdgeBudgetExceeded, reason);
                    aborted += 1;
                }
                Ok(()) => {
                    for vertex in graph.vertices() {
                        assert!(graph.in_degree(vertex) >= 1);
                        assert!(graph.out_degree(vertex) >= 1);
                    }
                }
            }
        }
        assert!(aborted > 0);
        assert!(aborted < 50);

        let plain = Mutator::new(Vec::new(), Vec::new(), false);
        for seed_value in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed_value);
            let mut graph = LabeledGraph::try_from_spec(seed).unwrap();
            plain.apply(&mut graph, &counts, &mut rng).unwrap();
            assert_eq!(3, graph.num_vertices());
            assert_eq!(4, graph.num_edges());
        }
    }

    #[test]
    fn remove_nothing_from_edgeless_graph() {
        let mutator = Mutator::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut graph = LabeledGraph::try_from_spec("A : : E\n").unwrap();
        assert_eq!(Ok(()), mutator.remove_edges(&mut graph, 0, &mut rng));
        assert_eq!(Ok(0), mutator.remove_nodes(&mut graph, 0, &mut rng));
        assert_eq!(
            Err(AbortReason::TooManyEdgeRemovals),
            mutator.remove_edges(&mut graph, 1, &mut rng)
        );
        assert_eq!(1, graph.num_vertices());
    }

    #[test]
    fn apply_is_reproducible() {
        let mutator = Mutator::new(Vec::new(), Vec::new(), true);
        let counts = OperationCounts {
            add_nodes: 2,
            add_edges: 1,
            remove_edges: 1,
            remove_nodes: 1,
        };
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut graph = seed_graph();
            mutator
                .apply(&mut graph, &counts, &mut rng)
                .map(|_| graph.to_spec())
        };
        for seed in 0..20 {
            assert_eq!(run(seed), run(seed));
        }
    }
}
