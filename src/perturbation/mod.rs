//! Random structural mutations of a `LabeledGraph`.
//!
//! A single perturbation consists of two steps. First, an [OperationScheduler] samples how
//! many operations of each kind (add node, add edge, remove edge, remove node) should be
//! applied. Then, a [Mutator] applies these operations to a fresh copy of the seed graph,
//! always in the same order:
//!
//!  1. remove nodes (edges destroyed this way count towards the scheduled edge removals);
//!  2. remove edges;
//!  3. add nodes (fresh `x<k>` names, or names drawn from a node allow-list);
//!  4. give every new node at least one incoming and one outgoing edge; in the
//!     *DSGRN-optimized* mode, do the same for every node of the graph, paying for these
//!     edges from the scheduled edge additions;
//!  5. add the remaining scheduled edges (random, or drawn from an edge allow-list).
//!
//! When some step cannot satisfy its scheduled count, the whole candidate is abandoned
//! with an [AbortReason]. The partially mutated graph should be discarded.

use serde::{Deserialize, Serialize};

/// **(internal)** Sampling of operation counts.
mod _impl_operation_scheduler;
/// **(internal)** The individual mutation operations of the `Mutator`.
mod _impl_mutator;
/// **(internal)** Degree completion of vertices without incoming or outgoing edges.
mod _impl_degree_completion;
/// **(internal)** Utility methods for `AbortReason`.
mod _impl_abort_reason;

use crate::PoolEdge;

pub use _impl_degree_completion::missing_edges;

/// Relative weights of the four operation kinds. They do not have to sum to one.
///
/// In parameter files, the fields are called `addNode`, `addEdge`,
/// `removeEdge` and `removeNode`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationWeights {
    pub add_node: f64,
    pub add_edge: f64,
    pub remove_edge: f64,
    pub remove_node: f64,
}

/// The number of operations of each kind that should be applied to one candidate.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct OperationCounts {
    pub add_nodes: usize,
    pub add_edges: usize,
    pub remove_edges: usize,
    pub remove_nodes: usize,
}

/// Samples `OperationCounts` from a weighted distribution over operation kinds and
/// an inclusive range of total operation counts.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationScheduler {
    /// Normalised cumulative probabilities, in the order add node, add edge,
    /// remove edge, remove node. The last entry is always exactly `1.0`.
    cumulative: [f64; 4],
    min_operations: usize,
    max_operations: usize,
}

/// Applies scheduled operations to a candidate graph.
///
/// The optional allow-lists restrict which node names and which edges can be added.
/// An empty list means no restriction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mutator {
    node_pool: Vec<String>,
    edge_pool: Vec<PoolEdge>,
    dsgrn_optimized: bool,
}

/// The reason why a candidate graph could not be built.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AbortReason {
    /// At least as many node removals as there are nodes.
    TooManyNodeRemovals,
    /// At least as many edge removals as there are edges.
    TooManyEdgeRemovals,
    /// A node is missing an edge, but no allow-listed edge can provide it.
    NoCompatibleEdge,
    /// Degree completion added more edges than the scheduled edge additions.
    EdgeBudgetExceeded,
    /// There are no more edges that can be added to the graph.
    EdgeSpaceExhausted,
}

/// The direction in which a vertex is missing an edge.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MissingEdge {
    Outgoing,
    Incoming,
}
