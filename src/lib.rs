//! A library for generating randomized structural perturbations of gene regulatory networks.
//!
//! The input is an *essential network specification*: a line-oriented text where every line
//! describes the regulators of one node, e.g. `B : (A + C)(~D) : E`. The library translates
//! such text into a [LabeledGraph], repeatedly applies random structural mutations (adding and
//! removing nodes and edges) to clones of the seed graph, and keeps every distinct result that
//! passes a computability check and a selection of structural filters.
//!
//! The main entry points are:
//!
//!  - [LabeledGraph] together with [LabeledGraph::try_from_spec] and [LabeledGraph::to_spec]
//!    for working with the network specification format.
//!  - [config::SearchParams] for loading search parameters from a `.json` file.
//!  - [search::NetworkSearch] for running the perturbation search itself.

use lazy_static::lazy_static;
use std::collections::btree_map::Keys;
use std::collections::BTreeMap;
use std::iter::Copied;

pub mod allow_lists;
pub mod config;
pub mod error;
pub mod filters;
pub mod perturbation;
pub mod search;

/// **(internal)** Implements the network specification translation for `LabeledGraph`.
mod _network_spec;
/// **(internal)** Utility methods for `EdgeSign`.
mod _impl_edge_sign;
/// **(internal)** Utility methods for `LabeledGraph`.
mod _impl_labeled_graph;
/// **(internal)** Utility methods for `PoolEdge`.
mod _impl_pool_edge;
/// **(internal)** Utility methods for `VertexId`.
mod _impl_vertex_id;

pub use _impl_labeled_graph::signed_directed_graph::SdGraph;
pub use error::PerturbError;

lazy_static! {
    /// A regex that reads a single line of a network specification: a node name, a colon,
    /// the regulatory expression, and an optional `: E` essentiality marker.
    static ref SPEC_LINE_REGEX: regex::Regex =
        regex::Regex::new(r"^\s*(?P<name>[^\s:()+*~]+)\s*:(?P<expr>[^:]*)(?::\s*E\s*)?$").unwrap();

    /// A regex that matches valid node names.
    static ref NAME_REGEX: regex::Regex = regex::Regex::new(r"^[^\s:()+*~]+$").unwrap();
}

/// A type-safe identifier of a vertex inside a `LabeledGraph`.
///
/// Identifiers are assigned in increasing order and are never reused within one graph, so a
/// removed vertex does not change the identifiers of the remaining ones.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

/// The label of a directed edge in a `LabeledGraph`.
///
/// Activation means the source promotes the expression of the target, repression means
/// it inhibits it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EdgeSign {
    Activation,
    Repression,
}

/// A mutable directed graph with string labels on vertices and `EdgeSign` labels on edges.
///
/// The graph is simple: every ordered pair of vertices has at most one edge. Both `(u, v)` and
/// `(v, u)` can exist independently, and a vertex can regulate itself, but only through
/// an activation (see [LabeledGraph::validate]).
///
/// Vertex labels are expected to be unique, but this is not enforced by the structure itself.
/// Instead, [LabeledGraph::find_vertex] reports an error when a label is ambiguous.
///
/// Cloning produces a deep, fully independent copy.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LabeledGraph {
    labels: BTreeMap<VertexId, String>,
    successors: BTreeMap<VertexId, BTreeMap<VertexId, EdgeSign>>,
    next_id: usize,
}

/// A named edge from a user-supplied edge allow-list.
///
/// Unlike graph edges, pool edges reference vertices by name, since the pool is shared by
/// all candidate graphs of a search.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PoolEdge {
    source: String,
    target: String,
    sign: EdgeSign,
}

/// An iterator over all `VertexId`s of a `LabeledGraph`.
pub type VertexIdIterator<'a> = Copied<Keys<'a, VertexId, String>>;

/// A single `(source, target, sign)` edge of a `LabeledGraph`.
pub type Edge = (VertexId, VertexId, EdgeSign);
